//! Regular table extraction.
//!
//! A regular table has a header like
//!
//! ```text
//! Name          01/02 08:00  01/01 07:30
//! ------------------------------------------
//! WBC           5.0          6.1
//! Hb            ***          13.2
//! ```
//!
//! Column spans are derived from this table's own header and reused for
//! every data line. Values are recovered by slicing each line at the same
//! char offsets.

use crate::columns::{char_slice, find_datetime_spans, span_text};
use crate::error::ExtractError;
use crate::types::{Entry, Table};
use chrono::NaiveDateTime;
use log::debug;
use std::collections::HashMap;

/// Result placeholder that never produces output
pub const MISSING_VALUE: &str = "***";

/// Reference year for ordering column labels; a leap year so `02/29` parses
const REFERENCE_YEAR: i32 = 2000;

/// Extract (timestamp, item, value) entries from a regular table.
///
/// A header without any `MM/DD HH:MM` stamp yields no entries.
pub fn extract_entries(table: &Table) -> Result<Vec<Entry>, ExtractError> {
    let header = table.header().ok_or(ExtractError::MissingHeader)?;
    let spans = find_datetime_spans(header);

    let first = match spans.first() {
        Some(span) => *span,
        None => {
            debug!("Regular table header has no date-time columns: {:?}", header);
            return Ok(Vec::new());
        }
    };

    let mut entries = Vec::new();
    for line in table.data_lines() {
        let item = char_slice(line, 0, first.start).trim();
        if is_placeholder_item(item) {
            continue;
        }

        for span in &spans {
            let value = span_text(line, *span).trim();
            if value.is_empty() || value == MISSING_VALUE {
                continue;
            }
            entries.push(Entry {
                timestamp: span_text(header, *span).trim().to_string(),
                item: item.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(entries)
}

/// Empty item names and underscore fill rows carry no data
fn is_placeholder_item(item: &str) -> bool {
    item.is_empty() || item.chars().all(|c| c == '_')
}

/// Parse a `MM/DD HH:MM` column label
pub fn parse_timestamp(label: &str) -> Result<NaiveDateTime, ExtractError> {
    NaiveDateTime::parse_from_str(&format!("{}/{}", REFERENCE_YEAR, label), "%Y/%m/%d %H:%M")
        .map_err(|_| ExtractError::InvalidTimestamp { label: label.to_string() })
}

/// Serialize entries into one line per timestamp, sorted by time.
///
/// Fragments keep row order within a line. Distinct labels that parse to the
/// same time keep first-seen order.
pub fn format_entries(entries: &[Entry]) -> Result<Vec<String>, ExtractError> {
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.timestamp.as_str()).or_insert_with(|| {
            groups.push((entry.timestamp.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(format!("{} {}", entry.item, entry.value));
    }

    let mut keyed = groups
        .into_iter()
        .map(|(label, fragments)| parse_timestamp(label).map(|time| (time, label, fragments)))
        .collect::<Result<Vec<_>, _>>()?;

    // Vec::sort_by_key is stable
    keyed.sort_by_key(|(time, _, _)| *time);

    Ok(keyed.into_iter().map(|(_, label, fragments)| format!("[{}] {}", label, fragments.join(" "))).collect())
}

/// Extract and format a regular table
pub fn process_regular_table(table: &Table) -> Result<Vec<String>, ExtractError> {
    debug!("Processing regular table with {} lines", table.lines.len());
    let entries = extract_entries(table)?;
    format_entries(&entries)
}

#[cfg(test)]
#[path = "regular_test.rs"]
mod regular_test;
