//! Date-time column location for regular table headers.

use crate::types::ColumnSpan;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATETIME_RE: Regex = Regex::new(r"\d{2}/\d{2} \d{2}:\d{2}").unwrap();
}

/// Find every `MM/DD HH:MM` stamp in a header line.
///
/// Returns char-offset spans in left-to-right order. An empty result means
/// the header has no data columns.
pub fn find_datetime_spans(line: &str) -> Vec<ColumnSpan> {
    DATETIME_RE
        .find_iter(line)
        .map(|m| {
            let start = line[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            ColumnSpan { start, end }
        })
        .collect()
}

/// Slice `s` by char offsets, clamping out-of-range bounds to the string.
///
/// A data line shorter than the header yields an empty slice for the
/// columns it does not reach.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |n: usize| s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    let from = byte_at(start);
    let to = byte_at(end);
    &s[from..to]
}

/// Slice the text covered by `span`
pub fn span_text(s: &str, span: ColumnSpan) -> &str {
    char_slice(s, span.start, span.end)
}
