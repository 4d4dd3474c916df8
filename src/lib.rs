//! IPv4 address and CIDR block arithmetic.
//!
//! Addresses are plain `u32` values. Every operation validates its input
//! and reports anything malformed as `None` instead of failing, so callers
//! processing raw records can map it straight to a null field.

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod record;

pub use models::{format_address, parse_address, Cidr};
pub use processing::{
    highest_in_cidr, highest_in_cidr_split, is_in_cidr, is_in_cidr_split, is_same_network,
    lowest_in_cidr, lowest_in_cidr_split,
};
pub use record::ip_address_to_number;
