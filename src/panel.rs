//! Panel (microscopy/serology) table extraction.
//!
//! Panel rows look like `Glucose          Negative(20230101)`: an item
//! name, at least ten spaces, a result, and an 8-digit date in parentheses.
//!
//! Two strategies are supported, selected by [`PanelFormat`]:
//! - `Legacy` emits one line per matching row, unfiltered.
//! - `Grouped` merges urine strip and urine sediment sub-items that share a
//!   date into one combined line each, and drops placeholder results.

use crate::types::{PanelFormat, Table};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref PANEL_ROW_RE: Regex = Regex::new(r"^(.+?)\s{10,}(.+?)\((\d{8})\)$").unwrap();
}

/// Urine dipstick sub-items merged into one "Urine strip" line per date
pub const URINE_STRIP_ITEMS: &[&str] = &[
    "Occult Blood",
    "Ketone",
    "Nitrite",
    "Leucocyte esterase",
    "Color",
    "Turbidity",
    "Glucose",
    "Protein",
    "Bilirubin",
    "Urobilinogen",
    "pH",
    "Sp.gr",
];

/// Urine microscopy sub-items merged into one "Urine sediment" line per date
pub const URINE_SEDIMENT_ITEMS: &[&str] =
    &["Cast", "RBC", "WBC", "EP.cell", "Bacteria", "Yeast", "Trichomonas", "Sperm", "Crystal"];

const URINE_STRIP_TITLE: &str = "Urine strip";
const URINE_SEDIMENT_TITLE: &str = "Urine sediment";

/// Results the grouped format never emits for standalone items
const SKIPPED_RESULTS: &[&str] = &["***", "-"];

/// Result that is dropped for grouped sub-items
const NO_RESULT: &str = "-";

/// One matched panel row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub item: String,
    pub result: String,
    /// `YYYY/MM/DD`
    pub date: String,
}

impl PanelRow {
    fn line(&self) -> String {
        format!("[{}] {}:{}", self.date, self.item, self.result)
    }

    fn fragment(&self) -> String {
        format!("{}:{}", self.item, self.result)
    }
}

/// Parse a panel data row; `None` when the row does not match the pattern
pub fn parse_panel_row(line: &str) -> Option<PanelRow> {
    let caps = PANEL_ROW_RE.captures(line.trim())?;
    Some(PanelRow {
        item: caps[1].trim().to_string(),
        result: caps[2].trim().to_string(),
        date: format_panel_date(&caps[3]),
    })
}

/// `YYYYMMDD` -> `YYYY/MM/DD`
pub fn format_panel_date(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 8 {
        return raw.to_string();
    }
    let part = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    format!("{}/{}/{}", part(0, 4), part(4, 6), part(6, chars.len()))
}

/// Which sub-panel an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrineGroup {
    Strip,
    Sediment,
}

impl UrineGroup {
    pub fn of_item(item: &str) -> Option<Self> {
        if URINE_STRIP_ITEMS.contains(&item) {
            Some(UrineGroup::Strip)
        } else if URINE_SEDIMENT_ITEMS.contains(&item) {
            Some(UrineGroup::Sediment)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UrineGroup::Strip => URINE_STRIP_TITLE,
            UrineGroup::Sediment => URINE_SEDIMENT_TITLE,
        }
    }
}

/// Pending urine sub-items for the date currently being accumulated.
///
/// Flushed on a date change, before a standalone item, and at the end of
/// the table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupState {
    pub date: Option<String>,
    pub strip: Vec<String>,
    pub sediment: Vec<String>,
}

impl GroupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: UrineGroup, fragment: String) {
        match group {
            UrineGroup::Strip => self.strip.push(fragment),
            UrineGroup::Sediment => self.sediment.push(fragment),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strip.is_empty() && self.sediment.is_empty()
    }

    /// Emit non-empty buffers as combined lines (strip first) and clear them.
    /// The current date is kept.
    pub fn flush(&mut self, out: &mut Vec<String>) {
        let date = self.date.as_deref().unwrap_or_default();
        for (group, pending) in [(UrineGroup::Strip, &mut self.strip), (UrineGroup::Sediment, &mut self.sediment)] {
            if !pending.is_empty() {
                out.push(format!("[{}] {}: {}", date, group.title(), pending.join(", ")));
                pending.clear();
            }
        }
    }

    /// Flush if `date` starts a new block, then adopt it
    pub fn enter_date(&mut self, date: &str, out: &mut Vec<String>) {
        if self.date.as_deref() != Some(date) {
            self.flush(out);
            self.date = Some(date.to_string());
        }
    }
}

/// One line per matching row, in row order
pub fn process_legacy(table: &Table) -> Vec<String> {
    table.data_lines().iter().filter_map(|line| parse_panel_row(line)).map(|row| row.line()).collect()
}

/// Merge urine sub-items per date block
pub fn process_grouped(table: &Table) -> Vec<String> {
    let mut out = Vec::new();
    let mut state = GroupState::new();

    for row in table.data_lines().iter().filter_map(|line| parse_panel_row(line)) {
        state.enter_date(&row.date, &mut out);

        if row.item == URINE_STRIP_TITLE || row.item == URINE_SEDIMENT_TITLE {
            continue;
        }

        match UrineGroup::of_item(&row.item) {
            Some(group) if row.result != NO_RESULT => state.push(group, row.fragment()),
            _ if SKIPPED_RESULTS.contains(&row.result.as_str()) => {}
            _ => {
                state.flush(&mut out);
                out.push(row.line());
            }
        }
    }

    state.flush(&mut out);
    out
}

/// Extract a panel table with the chosen strategy
pub fn process_panel_table(table: &Table, format: PanelFormat) -> Vec<String> {
    debug!("Processing panel table ({}) with {} lines", format.as_str(), table.lines.len());
    match format {
        PanelFormat::Legacy => process_legacy(table),
        PanelFormat::Grouped => process_grouped(table),
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;
