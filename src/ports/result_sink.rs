//! Result Sink Port - interface for exporting ranked results.
//!
//! The core defines the data downstream collaborators consume, not the
//! serialization format; implementations decide where ranked results and
//! the summary report end up.

use thiserror::Error;

use crate::domain::prioritization::RankedComplaints;

/// Errors that can occur while exporting results.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialization(String),
}

/// Port for persisting the outcome of one analysis.
pub trait ResultSink {
    /// Exports the ranked result set.
    fn export_results(&self, results: &RankedComplaints) -> Result<(), ExportError>;

    /// Writes the formatted summary report.
    fn write_report(&self, report: &str) -> Result<(), ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_error_carries_the_reason() {
        let err = ExportError::Serialization("unexpected NaN".to_string());
        assert_eq!(
            format!("{}", err),
            "Failed to serialize results: unexpected NaN"
        );
    }
}
