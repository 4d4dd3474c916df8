//! Address models.
//!
//! - [`ipv4`] - dotted-quad parsing/formatting and prefix masks
//! - [`Cidr`] - a validated `A.B.C.D/N` block

mod cidr;
mod ipv4;

pub use cidr::Cidr;
pub use ipv4::{
    check_prefix_len, format_address, leading_bit_mask, parse_addr, parse_address,
    trailing_bit_mask, MAX_ADDRESS, MAX_LENGTH, MIN_LENGTH,
};
