//! Condense copy-pasted, fixed-width lab reports into a compact summary.
//!
//! A report is split into tables, each table is dispatched to an extractor
//! by its header, and the extracted lines are joined in table order:
//!
//! ```text
//! Name  01/01 08:00            [01/01 08:00] WBC 5.0
//! ----                   ->
//! WBC   5.0
//! ```
//!
//! # Module Organization
//!
//! - `types` - Tables, column spans, entries and conversion options
//! - `columns` - `MM/DD HH:MM` column location in header lines
//! - `segment` - Splitting a report into tables
//! - `regular` - Per-timestamp column tables
//! - `panel` - Microscopy/serology panel tables (legacy and grouped)
//! - `abbreviate` - Optional term abbreviation pass
//! - `report` - Orchestration, failure isolation and result metrics

pub mod abbreviate;
pub mod columns;
pub mod error;
pub mod panel;
pub mod regular;
pub mod report;
pub mod segment;
pub mod types;

pub use error::{ExtractError, ProcessingError};
pub use report::{Conversion, ConversionSummary, TableFailure, convert, process_report, process_report_with};
pub use types::{PanelFormat, ReportOptions};
