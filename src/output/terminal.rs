//! Terminal output utilities.

use crate::record::BatchStats;
use colored::Colorize;

/// One-line summary of a batch run for stderr.
pub fn format_summary(stats: &BatchStats) -> String {
    let nulls = format!("{} null", stats.nulls);
    let nulls = if stats.nulls > 0 {
        nulls.on_red().to_string()
    } else {
        nulls
    };
    format!(
        "#{}# {} records, {} converted, {}",
        "ip2num".on_blue(),
        stats.records,
        stats.converted.to_string().green(),
        nulls
    )
}
