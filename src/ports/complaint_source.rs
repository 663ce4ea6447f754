//! Complaint Source Port - interface for loading complaint records.
//!
//! Ingestion lives outside the core: the engine only defines the shape
//! of the records it consumes. Implementations may read files, query a
//! database, or hand back in-memory fixtures.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prioritization::Complaint;

/// Errors that can occur while loading complaint records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Complaint data not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to read complaint data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse complaint data: {0}")]
    Parse(String),
}

/// Port for loading the complaint records of one analysis.
pub trait ComplaintSource {
    /// Loads all complaint records.
    ///
    /// # Errors
    /// Returns `SourceError::NotFound` when the backing data does not
    /// exist, `Io`/`Parse` when it cannot be read or decoded.
    fn load(&self) -> Result<Vec<Complaint>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = SourceError::NotFound(PathBuf::from("data/complaints.json"));
        assert_eq!(
            format!("{}", err),
            "Complaint data not found at data/complaints.json"
        );
    }

    #[test]
    fn parse_error_carries_the_reason() {
        let err = SourceError::Parse("missing field `id`".to_string());
        assert!(format!("{}", err).contains("missing field `id`"));
    }
}
