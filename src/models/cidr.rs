//! CIDR block value type.

use super::ipv4::{check_prefix_len, host_bits, parse_addr};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 block in `A.B.C.D/N` notation.
///
/// The address is kept as given; it does not have to be aligned to the
/// prefix. [`Cidr::lo`] gives the aligned network address.
///
/// Only the validating constructors can build one:
/// ```compile_fail
/// use ipv4_cidr_util::Cidr;
/// let _ = Cidr { addr: 0, len: 0 };
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: u32,
    // always within 1..=32
    len: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a string such as `"10.0.0.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/prefix {addr_cidr:?}").into());
        }
        let len: i64 = parts[1]
            .parse()
            .map_err(|e| format!("Invalid prefix length {:?}: {e}", parts[1]))?;
        let len = check_prefix_len(len)?;
        let addr =
            parse_addr(parts[0]).map_err(|e| format!("Invalid address {:?}: {e}", parts[0]))?;
        Ok(Cidr { addr, len })
    }

    /// Build a [`Cidr`] from an address value and a prefix length.
    pub fn from_parts(addr: u32, len: i64) -> Result<Cidr, Box<dyn Error>> {
        let len = check_prefix_len(len)?;
        Ok(Cidr { addr, len })
    }

    /// The address part as given.
    pub fn addr(&self) -> u32 {
        self.addr
    }

    /// Prefix length, within `1..=32`.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Host bits of this block.
    pub fn trailing_mask(&self) -> u32 {
        host_bits(self.len)
    }

    /// Network bits of this block.
    pub fn leading_mask(&self) -> u32 {
        !self.trailing_mask()
    }

    /// Highest address in the block.
    pub fn hi(&self) -> u32 {
        self.addr | self.trailing_mask()
    }

    /// Lowest address in the block.
    pub fn lo(&self) -> u32 {
        self.addr & !self.trailing_mask()
    }

    /// True when `addr` shares this block's network bits.
    pub fn contains(&self, addr: u32) -> bool {
        let mask = self.leading_mask();
        (self.addr & mask) == (addr & mask)
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.addr), self.len)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_new() {
        let cidr = Cidr::new("10.0.0.0/24").unwrap();
        assert_eq!(cidr.addr(), 0x0A000000);
        assert_eq!(cidr.prefix_len(), 24);
        assert_eq!(cidr.to_string(), "10.0.0.0/24");

        assert!(Cidr::new("10.0.0.0").is_err());
        assert!(Cidr::new("10.0.0.0/24/1").is_err());
        assert!(Cidr::new("10.0.0.0/").is_err());
        assert!(Cidr::new("10.0.0.0/x").is_err());
        assert!(Cidr::new("10.0.0.0/0").is_err());
        assert!(Cidr::new("10.0.0.0/33").is_err());
        assert!(Cidr::new("10.0.0/8").is_err());
    }

    #[test]
    fn test_cidr_unaligned_addr_kept() {
        let cidr: Cidr = "10.0.0.5/24".parse().unwrap();
        assert_eq!(cidr.to_string(), "10.0.0.5/24");
        assert_eq!(cidr.lo(), 0x0A000000);
        assert_eq!(cidr.hi(), 0x0A0000FF);
    }

    #[test]
    fn test_cidr_hi_lo() {
        let cidr = Cidr::new("192.168.1.0/8").unwrap();
        assert_eq!(cidr.lo(), 0xC0000000);
        assert_eq!(cidr.hi(), 0xC0FFFFFF);

        let host = Cidr::new("192.168.1.7/32").unwrap();
        assert_eq!(host.lo(), host.addr());
        assert_eq!(host.hi(), host.addr());

        let half = Cidr::new("200.1.2.3/1").unwrap();
        assert_eq!(half.lo(), 0x80000000);
        assert_eq!(half.hi(), 0xFFFFFFFF);
    }

    #[test]
    fn test_cidr_contains() {
        let cidr = Cidr::new("10.0.0.0/24").unwrap();
        assert!(cidr.contains(0x0A000011));
        assert!(!cidr.contains(0x0A000111));
        assert_eq!(cidr.leading_mask(), 0xFFFFFF00);
        assert_eq!(cidr.trailing_mask(), 0x000000FF);
    }

    #[test]
    fn test_cidr_from_parts() {
        assert_eq!(
            Cidr::from_parts(0x0A000000, 16).unwrap(),
            Cidr::new("10.0.0.0/16").unwrap()
        );
        assert!(Cidr::from_parts(0, 0).is_err());
        assert!(Cidr::from_parts(0, 33).is_err());
    }

    #[test]
    fn test_cidr_masks_at_prefix_limits() {
        let widest = Cidr::from_parts(0x0A000000, 1).unwrap();
        assert_eq!(widest.prefix_len(), 1);
        assert_eq!(widest.trailing_mask(), 0x7FFFFFFF);
        assert_eq!(widest.leading_mask(), 0x80000000);
        assert!(widest.contains(0x0B000000));
        assert_eq!(widest.hi(), 0x7FFFFFFF);

        let host = Cidr::from_parts(0x0A000000, 32).unwrap();
        assert_eq!(host.trailing_mask(), 0);
        assert_eq!(host.leading_mask(), 0xFFFFFFFF);
        assert!(!host.contains(0x0B000000));

        for len in [0, -1, 33, i64::MAX] {
            assert!(Cidr::from_parts(0x0A000000, len).is_err(), "/{len}");
        }
    }

    #[test]
    fn test_cidr_serde() {
        let cidr = Cidr::new("172.16.0.0/12").unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
        assert!(serde_json::from_str::<Cidr>("\"172.16.0.0/0\"").is_err());
    }

    #[test]
    fn test_cidr_cmp() {
        let a = Cidr::new("10.0.0.1/24").unwrap();
        let b = Cidr::new("10.0.0.2/24").unwrap();
        let c = Cidr::new("10.0.0.1/25").unwrap();
        assert!(a < b);
        assert!(a < c);
        assert_eq!(a, Cidr::new("10.0.0.1/24").unwrap());
    }
}
