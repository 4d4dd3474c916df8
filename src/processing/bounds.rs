//! Lowest and highest address of a CIDR block.
//!
//! Each operation comes in two shapes: a combined `"A.B.C.D/N"` string, and a
//! `_split` form taking the address value and prefix length separately.

use super::{parse_cidr, split_cidr};

/// Highest address in the block, `None` when the CIDR is invalid.
///
/// The address need not be aligned: `"10.0.0.5/24"` gives `10.0.0.255`.
pub fn highest_in_cidr(cidr: &str) -> Option<u32> {
    parse_cidr(cidr).map(|c| c.hi())
}

/// Highest address for an address value and prefix length.
pub fn highest_in_cidr_split(ip_number: u32, cidr_leading_bits: i64) -> Option<u32> {
    split_cidr(ip_number, cidr_leading_bits).map(|c| c.hi())
}

/// Lowest address in the block, `None` when the CIDR is invalid.
pub fn lowest_in_cidr(cidr: &str) -> Option<u32> {
    parse_cidr(cidr).map(|c| c.lo())
}

/// Lowest address for an address value and prefix length.
pub fn lowest_in_cidr_split(ip_number: u32, cidr_leading_bits: i64) -> Option<u32> {
    split_cidr(ip_number, cidr_leading_bits).map(|c| c.lo())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_address;

    #[test]
    fn test_highest_lowest_aligned() {
        assert_eq!(highest_in_cidr("10.0.0.0/24"), parse_address("10.0.0.255"));
        assert_eq!(lowest_in_cidr("10.0.0.0/24"), parse_address("10.0.0.0"));
        assert_eq!(highest_in_cidr("10.0.0.0/8"), parse_address("10.255.255.255"));
        assert_eq!(lowest_in_cidr("10.20.30.40/32"), parse_address("10.20.30.40"));
    }

    #[test]
    fn test_highest_lowest_unaligned() {
        assert_eq!(highest_in_cidr("10.0.0.5/24"), parse_address("10.0.0.255"));
        assert_eq!(lowest_in_cidr("10.0.0.5/24"), parse_address("10.0.0.0"));
    }

    #[test]
    fn test_bad_prefix() {
        for cidr in ["10.0.0.0/0", "10.0.0.0/33", "10.0.0.0/-1", "10.0.0.0/abc"] {
            assert_eq!(highest_in_cidr(cidr), None, "{cidr}");
            assert_eq!(lowest_in_cidr(cidr), None, "{cidr}");
        }
        assert_eq!(highest_in_cidr_split(0x0A000000, 0), None);
        assert_eq!(highest_in_cidr_split(0x0A000000, 33), None);
        assert_eq!(lowest_in_cidr_split(0x0A000000, 0), None);
        assert_eq!(lowest_in_cidr_split(0x0A000000, 33), None);
    }

    #[test]
    fn test_bad_syntax() {
        for cidr in ["10.0.0.0", "10.0.0.0/24/8", "/24", "10.0.0.256/24", ""] {
            assert_eq!(highest_in_cidr(cidr), None, "{cidr}");
            assert_eq!(lowest_in_cidr(cidr), None, "{cidr}");
        }
    }

    #[test]
    fn test_split_forms() {
        let addr = parse_address("172.16.5.9").unwrap();
        assert_eq!(highest_in_cidr_split(addr, 16), parse_address("172.16.255.255"));
        assert_eq!(lowest_in_cidr_split(addr, 16), parse_address("172.16.0.0"));
        assert_eq!(highest_in_cidr_split(addr, 1), Some(0xFFFFFFFF));
        assert_eq!(lowest_in_cidr_split(addr, 1), Some(0x80000000));
        assert_eq!(highest_in_cidr_split(addr, 32), Some(addr));
    }
}
