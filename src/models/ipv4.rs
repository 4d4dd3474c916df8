//! IPv4 address parsing, formatting and prefix masks.
//!
//! Addresses are carried as a plain `u32` with the first octet in the most
//! significant byte. Every public operation reports invalid input as `None`;
//! the `Result` returning helpers carry the reason for logging.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Minimum accepted prefix length. A `/0` block is rejected.
pub const MIN_LENGTH: u8 = 1;

/// Highest value an IPv4 address can take.
pub const MAX_ADDRESS: i64 = 0xFFFF_FFFF;

/// Parse a dotted-quad string into its `u32` value.
///
/// # Examples
/// ```
/// use ipv4_cidr_util::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1"), Some(0x0A000001));
/// assert_eq!(parse_address("10.0.0"), None);
/// ```
pub fn parse_address(ipv4: &str) -> Option<u32> {
    parse_addr(ipv4)
        .map_err(|e| log::trace!("parse_address({ipv4:?}) rejected: {e}"))
        .ok()
}

/// Parse a dotted-quad string, keeping the reason for rejection.
pub fn parse_addr(ipv4: &str) -> Result<u32, Box<dyn Error>> {
    let fields: Vec<&str> = ipv4.split('.').collect();
    if fields.len() != 4 {
        return Err(format!("Expected 4 fields, found {}", fields.len()).into());
    }

    let mut addr: u32 = 0;
    for field in fields {
        addr = (addr << 8) | parse_octet(field)?;
    }
    Ok(addr)
}

fn parse_octet(field: &str) -> Result<u32, Box<dyn Error>> {
    let value: i32 = field
        .parse()
        .map_err(|e| format!("Invalid octet {field:?}: {e}"))?;
    if !(0..=255).contains(&value) {
        return Err(format!("Octet {value} out of range").into());
    }
    Ok(value as u32)
}

/// Render an address value as `A.B.C.D`.
///
/// Takes a wide signed value so callers holding 64-bit columns can pass
/// them through; anything outside `0..=0xFFFFFFFF` gives `None`.
///
/// # Examples
/// ```
/// use ipv4_cidr_util::models::format_address;
/// assert_eq!(format_address(Some(0x0A000001)).as_deref(), Some("10.0.0.1"));
/// assert_eq!(format_address(Some(-1)), None);
/// assert_eq!(format_address(None), None);
/// ```
pub fn format_address(ip_number: Option<i64>) -> Option<String> {
    let ip_number = ip_number?;
    if !(0..=MAX_ADDRESS).contains(&ip_number) {
        log::trace!("format_address({ip_number}) out of range");
        return None;
    }
    Some(Ipv4Addr::from(ip_number as u32).to_string())
}

/// Validate a prefix length, returning it narrowed to `u8`.
pub fn check_prefix_len(len: i64) -> Result<u8, Box<dyn Error>> {
    if len < MIN_LENGTH as i64 || len > MAX_LENGTH as i64 {
        Err(format!("Prefix length {len} not in {MIN_LENGTH}..={MAX_LENGTH}").into())
    } else {
        Ok(len as u8)
    }
}

/// Host bits of a prefix, e.g. `/24` gives `0x000000FF`.
pub fn trailing_bit_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    let len = check_prefix_len(len as i64)?;
    Ok(host_bits(len))
}

// Caller guarantees `len <= MAX_LENGTH`.
pub(super) fn host_bits(len: u8) -> u32 {
    let mask = (1u64 << (MAX_LENGTH - len)) - 1;
    mask as u32
}

/// Network bits of a prefix, e.g. `/24` gives `0xFFFFFF00`.
///
/// # Examples
/// ```
/// use ipv4_cidr_util::models::leading_bit_mask;
/// assert_eq!(leading_bit_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn leading_bit_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    Ok(u32::MAX & !trailing_bit_mask(len)?)
}
