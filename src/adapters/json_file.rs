//! JSON File Adapters
//!
//! File-based implementations of the complaint source and result sink
//! ports. Complaints are read from a JSON array; ranked results are
//! written back as a JSON array in rank order, alongside the plain-text
//! summary report.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::prioritization::{Complaint, RankedComplaints};
use crate::ports::{ComplaintSource, ExportError, ResultSink, SourceError};

/// Loads complaint records from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonComplaintSource {
    path: PathBuf,
}

impl JsonComplaintSource {
    /// Creates a source reading from the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ComplaintSource for JsonComplaintSource {
    fn load(&self) -> Result<Vec<Complaint>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path)?;
        let complaints: Vec<Complaint> =
            serde_json::from_str(&raw).map_err(|e| SourceError::Parse(e.to_string()))?;
        info!(count = complaints.len(), path = %self.path.display(), "complaints loaded");
        Ok(complaints)
    }
}

/// Writes ranked results and the summary report to files.
#[derive(Debug, Clone)]
pub struct JsonResultSink {
    results_path: PathBuf,
    report_path: PathBuf,
}

impl JsonResultSink {
    /// Creates a sink writing results and report to the given paths.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(results_path: P, report_path: Q) -> Self {
        Self {
            results_path: results_path.as_ref().to_path_buf(),
            report_path: report_path.as_ref().to_path_buf(),
        }
    }

    fn ensure_parent(path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl ResultSink for JsonResultSink {
    fn export_results(&self, results: &RankedComplaints) -> Result<(), ExportError> {
        Self::ensure_parent(&self.results_path)?;
        let json = serde_json::to_string_pretty(results)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        fs::write(&self.results_path, json)?;
        info!(count = results.len(), path = %self.results_path.display(), "results exported");
        Ok(())
    }

    fn write_report(&self, report: &str) -> Result<(), ExportError> {
        Self::ensure_parent(&self.report_path)?;
        fs::write(&self.report_path, report)?;
        info!(path = %self.report_path.display(), "summary report written");
        Ok(())
    }
}
