//! Record output formatting.

use crate::config::Config;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// One converted record in json output.
#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    /// 1-based input line number.
    pub line: usize,
    /// The address column as read (`null` when the record had no such column).
    pub input: Option<&'a str>,
    /// Numeric address (`null` when invalid).
    pub ip_number: Option<i64>,
}

/// Write the input record, unchanged byte for byte, with the number
/// appended as a new field.
pub fn write_tsv_row<W: Write>(
    writer: &mut W,
    line: &[u8],
    ip_number: Option<i64>,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let value = match ip_number {
        Some(n) => n.to_string(),
        None => config.null_token.clone(),
    };
    writer.write_all(line)?;
    writeln!(writer, "{delim}{value}", delim = config.delimiter)?;
    Ok(())
}

/// Write one [`JsonRecord`] per line.
pub fn write_json_row<W: Write>(
    writer: &mut W,
    line: usize,
    input: Option<&str>,
    ip_number: Option<i64>,
) -> Result<(), Box<dyn Error>> {
    let record = JsonRecord {
        line,
        input,
        ip_number,
    };
    serde_json::to_writer(&mut *writer, &record)?;
    writeln!(writer)?;
    Ok(())
}
