//! Error types for the prioritization engine.

use thiserror::Error;

/// Errors surfaced by prioritization and its query operations.
///
/// All are local precondition violations reported immediately with no
/// partial results. Judgment inconsistency is a warning, not an error,
/// and never appears here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrioritizeError {
    #[error("Criteria weights not set; derive or supply weights before prioritizing")]
    WeightsNotSet,

    #[error("Complaint records are missing criteria scores: {}", .criteria.join(", "))]
    MissingCriteria { criteria: Vec<String> },

    #[error("No prioritized results; run prioritize first")]
    NoResults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_not_set_displays_correctly() {
        assert_eq!(
            format!("{}", PrioritizeError::WeightsNotSet),
            "Criteria weights not set; derive or supply weights before prioritizing"
        );
    }

    #[test]
    fn missing_criteria_names_every_column() {
        let err = PrioritizeError::MissingCriteria {
            criteria: vec!["Urgency Level".to_string(), "Scale of Impact".to_string()],
        };
        assert_eq!(
            format!("{}", err),
            "Complaint records are missing criteria scores: Urgency Level, Scale of Impact"
        );
    }
}
