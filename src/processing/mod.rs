//! Address and CIDR comparisons.
//!
//! - [`bounds`] - lowest/highest address of a block
//! - [`membership`] - block membership and netmask comparison

use crate::models::Cidr;

mod bounds;
mod membership;

pub use bounds::{highest_in_cidr, highest_in_cidr_split, lowest_in_cidr, lowest_in_cidr_split};
pub use membership::{is_in_cidr, is_in_cidr_split, is_same_network};

/// Parse `"A.B.C.D/N"`, logging the reason when it is rejected.
pub(crate) fn parse_cidr(cidr: &str) -> Option<Cidr> {
    Cidr::new(cidr)
        .map_err(|e| log::trace!("CIDR {cidr:?} rejected: {e}"))
        .ok()
}

/// Build a block from an address value and prefix length, `None` when invalid.
pub(crate) fn split_cidr(ip_number: u32, cidr_leading_bits: i64) -> Option<Cidr> {
    Cidr::from_parts(ip_number, cidr_leading_bits)
        .map_err(|e| log::trace!("CIDR {ip_number}/{cidr_leading_bits} rejected: {e}"))
        .ok()
}
