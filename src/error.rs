use thiserror::Error;

/// Failure while extracting a single table.
///
/// Recovered by the orchestrator: the table contributes no lines and the
/// run continues with the next table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("column label '{label}' is not a MM/DD HH:MM timestamp")]
    InvalidTimestamp { label: String },

    #[error("table has no header line")]
    MissingHeader,
}

/// Unrecoverable failure of a whole conversion call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to process report: {message}")]
pub struct ProcessingError {
    pub message: String,
}

impl ProcessingError {
    pub fn new(message: impl Into<String>) -> Self {
        ProcessingError { message: message.into() }
    }
}
