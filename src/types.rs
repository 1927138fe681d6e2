/// Core data structures for report conversion
///
/// This module defines the values that flow through the pipeline:
/// raw text is split into `Table`s, tables yield `Entry`s, and entries
/// are serialized into formatted lines.

/// A contiguous block of report lines sharing one header.
///
/// Line 0 is the header, line 1 is a separator, the rest are data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub lines: Vec<String>,
}

impl Table {
    /// Open a new table starting at a header line
    pub fn new(header: &str) -> Self {
        Table { lines: vec![header.to_string()] }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(|s| s.as_str())
    }

    /// Data rows (everything after the header and the separator line)
    pub fn data_lines(&self) -> &[String] {
        self.lines.get(2..).unwrap_or(&[])
    }

    pub fn kind(&self) -> TableKind {
        TableKind::of_header(self.header().unwrap_or(""))
    }
}

/// Which extractor a table is dispatched to, decided by its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Per-timestamp column header ("Name  01/01 08:00  01/02 08:00 ...")
    Regular,
    /// Microscopy/serology panel, one dated item per row
    Panel,
}

impl TableKind {
    pub fn of_header(header: &str) -> Self {
        if header.contains(PANEL_MARKER) { TableKind::Panel } else { TableKind::Regular }
    }
}

/// Marker identifying the microscopy/serology panel table header
pub const PANEL_MARKER: &str = "檢驗(鏡檢,血清)項目:";

/// Character-offset range of one `MM/DD HH:MM` stamp in a header line.
///
/// Offsets count chars, not bytes, so slicing data lines with
/// multi-byte item names stays aligned with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

/// One (timestamp, item, value) observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: String, // "01/01 08:00" (regular) or "2023/01/01" (panel)
    pub item: String,      // "WBC"
    pub value: String,     // "5.0"
}

/// Panel extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFormat {
    /// One line per matching row, no filtering
    #[default]
    Legacy,
    /// Urine strip/sediment sub-items merged per date, `-` results dropped
    Grouped,
}

impl PanelFormat {
    pub fn from_grouped(grouped: bool) -> Self {
        if grouped { PanelFormat::Grouped } else { PanelFormat::Legacy }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelFormat::Legacy => "legacy",
            PanelFormat::Grouped => "grouped",
        }
    }
}

/// Options for a single conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub use_abbreviations: bool,
    pub panel_format: PanelFormat,
}

impl ReportOptions {
    pub fn new(use_abbreviations: bool, use_grouped_panel_format: bool) -> Self {
        ReportOptions { use_abbreviations, panel_format: PanelFormat::from_grouped(use_grouped_panel_format) }
    }
}
