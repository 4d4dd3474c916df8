//! Output formatting for converted records.
//!
//! - [`record`] - tsv and json record writers
//! - [`terminal`] - colored run summary

mod record;
mod terminal;

pub use record::{write_json_row, write_tsv_row, JsonRecord};
pub use terminal::format_summary;
