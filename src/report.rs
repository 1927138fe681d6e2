/// Report orchestration
///
/// This module handles:
/// - Segmenting a report and dispatching each table to its extractor
/// - Isolating per-table failures so one bad table never aborts the run
/// - Joining table output and applying the abbreviation pass
/// - The derived input/output metrics reported to callers
use crate::abbreviate::apply_abbreviations;
use crate::error::{ExtractError, ProcessingError};
use crate::panel::process_panel_table;
use crate::regular::process_regular_table;
use crate::segment::split_tables;
use crate::types::{PanelFormat, ReportOptions, Table, TableKind};
use log::{debug, error, warn};
use std::panic::{self, AssertUnwindSafe};

/// A table whose extraction failed, by position in the report (0-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFailure {
    pub index: usize,
    pub error: ExtractError,
}

/// Output of one conversion call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversion {
    pub text: String,
    /// Tables that contributed no lines because extraction failed
    pub failures: Vec<TableFailure>,
}

/// Run the extractor matching the table's header
pub fn process_table(table: &Table, format: PanelFormat) -> Result<Vec<String>, ExtractError> {
    let header = table.header().ok_or(ExtractError::MissingHeader)?;
    match TableKind::of_header(header) {
        TableKind::Panel => Ok(process_panel_table(table, format)),
        TableKind::Regular => process_regular_table(table),
    }
}

/// Convert a raw report into the condensed summary.
///
/// Tables are processed in order; a failing table is logged, recorded in
/// `failures`, and skipped.
pub fn convert(report: &str, options: &ReportOptions) -> Conversion {
    let tables = split_tables(report);
    debug!("Converting report: {} tables, {:?}", tables.len(), options);

    let (lines, failures) = tables.iter().enumerate().fold(
        (Vec::new(), Vec::new()),
        |(mut lines, mut failures): (Vec<String>, Vec<TableFailure>), (index, table)| {
            match process_table(table, options.panel_format) {
                Ok(table_lines) => {
                    debug!("Table {} produced {} lines", index + 1, table_lines.len());
                    lines.extend(table_lines);
                }
                Err(e) => {
                    warn!("Error processing table {}: {}", index + 1, e);
                    failures.push(TableFailure { index, error: e });
                }
            }
            (lines, failures)
        },
    );

    let mut text = lines.join("\n");
    if options.use_abbreviations {
        text = apply_abbreviations(&text);
    }

    Conversion { text, failures }
}

/// Entry point for callers: convert a report and return only the text.
///
/// Per-table failures are absorbed; anything escaping the pipeline itself is
/// returned as a `ProcessingError`. The report content is never echoed in
/// the error message.
pub fn process_report(
    report: &str,
    use_abbreviations: bool,
    use_grouped_panel_format: bool,
) -> Result<String, ProcessingError> {
    process_report_with(report, &ReportOptions::new(use_abbreviations, use_grouped_panel_format))
}

/// Same as [`process_report`], taking resolved options
pub fn process_report_with(report: &str, options: &ReportOptions) -> Result<String, ProcessingError> {
    run_guarded(|| convert(report, options).text)
}

/// Run the pipeline, turning a panic into a `ProcessingError`
fn run_guarded<F>(f: F) -> Result<String, ProcessingError>
where
    F: FnOnce() -> String,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unexpected internal error".to_string());
        error!("Report processing failed: {}", message);
        ProcessingError::new(message)
    })
}

/// Result envelope with length metrics, as returned to the web/CLI shell
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionSummary {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_count: Option<usize>,
    /// May be negative when the output is longer than the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionSummary {
    /// Build the envelope from a conversion result. Counts are in chars.
    pub fn from_result(input: &str, result: &Result<String, ProcessingError>) -> Self {
        match result {
            Ok(output) => {
                let input_count = input.chars().count();
                let output_count = output.chars().count();
                ConversionSummary {
                    success: true,
                    result: Some(output.clone()),
                    input_count: Some(input_count),
                    output_count: Some(output_count),
                    reduced_count: Some(input_count as i64 - output_count as i64),
                    error: None,
                }
            }
            Err(e) => ConversionSummary {
                success: false,
                result: None,
                input_count: None,
                output_count: None,
                reduced_count: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// One-line status, e.g. "input 120 chars, output 40 chars, reduced by 80"
    pub fn status_line(&self) -> Option<String> {
        match (self.input_count, self.output_count, self.reduced_count) {
            (Some(i), Some(o), Some(r)) => Some(format!("input {} chars, output {} chars, reduced by {}", i, o, r)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
