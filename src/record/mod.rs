//! Record-processing integration.
//!
//! - [`adapter`] - the single-column `ip_address_to_number` contract
//! - [`batch`] - line-oriented filter applying it to a stream of records

mod adapter;
mod batch;

pub use adapter::ip_address_to_number;
pub use batch::{process_records, BatchStats};
