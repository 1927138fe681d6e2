/// Table segmentation
///
/// Splits a raw report into tables. A table starts at a recognised header
/// line and runs until the next header or the end of input.
use crate::types::{PANEL_MARKER, Table};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref REGULAR_HEADER_RE: Regex = Regex::new(r"^Name\s+(?:\d{2}/\d{2} \d{2}:\d{2}\s*)+").unwrap();
}

/// Check whether a line opens a new table
pub fn is_header_line(line: &str) -> bool {
    REGULAR_HEADER_RE.is_match(line) || line.contains(PANEL_MARKER)
}

/// Split a report into tables.
///
/// Lines before the first header are discarded. A report without any
/// recognised header yields no tables.
pub fn split_tables(report: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Option<Table> = None;

    let trimmed = report.trim();
    if trimmed.is_empty() {
        return tables;
    }

    for (i, line) in trimmed.split('\n').enumerate() {
        if is_header_line(line) {
            if let Some(table) = current.take() {
                debug!("Closed table with {} lines", table.lines.len());
                tables.push(table);
            }
            debug!("Header at line {}", i);
            current = Some(Table::new(line));
        } else if let Some(ref mut table) = current {
            table.push(line);
        }
    }

    if let Some(table) = current {
        debug!("Closed final table with {} lines", table.lines.len());
        tables.push(table);
    }

    debug!("Found {} tables", tables.len());
    tables
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;
