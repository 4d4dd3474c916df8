//! Membership tests against a CIDR block or a raw netmask.

use super::{parse_cidr, split_cidr};
use crate::models::parse_address;

/// Check whether `ip` falls inside `cidr`.
///
/// # Returns
/// * `Some(true)` / `Some(false)` - membership
/// * `None` - when either the address or the block is invalid
pub fn is_in_cidr(ip: &str, cidr: &str) -> Option<bool> {
    let block = parse_cidr(cidr)?;
    let ip_number = parse_address(ip)?;
    Some(block.contains(ip_number))
}

/// Same as [`is_in_cidr`] with the block given as address string and prefix length.
pub fn is_in_cidr_split(ip: &str, cidr_ip: &str, cidr_leading_bits: i64) -> Option<bool> {
    let block = split_cidr(parse_address(cidr_ip)?, cidr_leading_bits)?;
    let ip_number = parse_address(ip)?;
    Some(block.contains(ip_number))
}

/// Compare two addresses under `netmask`.
///
/// The mask is applied as-is; it is not required to be contiguous.
pub fn is_same_network(ip1: &str, ip2: &str, netmask: &str) -> Option<bool> {
    let ip1 = parse_address(ip1)?;
    let ip2 = parse_address(ip2)?;
    let netmask = parse_address(netmask)?;
    Some((ip1 & netmask) == (ip2 & netmask))
}
