//! Single-column conversion used by record-processing hosts.

use crate::models::parse_address;

/// Convert a record's address column to its numeric value.
///
/// The result is widened to `i64` so hosts with signed 64-bit columns get
/// the full unsigned range. A missing column and an invalid address both
/// give `None`, which the host writes as its null.
///
/// # Examples
/// ```
/// use ipv4_cidr_util::record::ip_address_to_number;
/// assert_eq!(ip_address_to_number(Some("255.255.255.255")), Some(4294967295));
/// assert_eq!(ip_address_to_number(None), None);
/// ```
pub fn ip_address_to_number(value: Option<&str>) -> Option<i64> {
    parse_address(value?).map(i64::from)
}
