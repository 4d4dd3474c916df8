//! Batch conversion of delimited records.

use super::adapter::ip_address_to_number;
use crate::config::{Config, OutputFormat};
use crate::output::{write_json_row, write_tsv_row};
use std::borrow::Cow;
use std::error::Error;
use std::io::{BufRead, Write};

/// Counters collected while converting a stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Records read.
    pub records: usize,
    /// Records whose address column converted to a number.
    pub converted: usize,
    /// Records written with a null number.
    pub nulls: usize,
}

/// Convert the configured column of every record read from `reader`.
///
/// Each record is written to `writer` in `config.format`. Invalid or
/// missing addresses never stop the batch; they are counted as nulls. A
/// record that is not valid UTF-8 is decoded lossily to find its column and
/// written back byte for byte in tsv output.
///
/// # Returns
/// * `Ok(BatchStats)` - counters for the whole stream
/// * `Err` - on read/write failure
pub fn process_records<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &Config,
) -> Result<BatchStats, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    let mut stats = BatchStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| format!("Error reading record {}: {e}", stats.records + 1))?;
        if read == 0 {
            break;
        }
        stats.records += 1;

        let record = trim_line_end(&buf);
        let line = String::from_utf8_lossy(record);
        if let Cow::Owned(_) = line {
            log::debug!("record {} is not valid UTF-8", stats.records);
        }
        let field = line.split(config.delimiter.as_str()).nth(config.column);
        let ip_number = ip_address_to_number(field);

        match ip_number {
            Some(_) => stats.converted += 1,
            None => {
                stats.nulls += 1;
                log::debug!(
                    "record {} column {}: {:?} -> null",
                    stats.records,
                    config.column,
                    field
                );
            }
        }

        match config.format {
            OutputFormat::Tsv => write_tsv_row(writer, record, ip_number, config)?,
            OutputFormat::Json => write_json_row(writer, stats.records, field, ip_number)?,
        }
    }
    writer.flush()?;

    log::info!(
        "Processed {} records: {} converted, {} null",
        stats.records,
        stats.converted,
        stats.nulls
    );
    Ok(stats)
}

// Strip `\n` or `\r\n`.
fn trim_line_end(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
