//! Error types for the AHP weight-derivation engine.

use thiserror::Error;

/// Errors that can occur while building matrices and deriving weights.
///
/// Inconsistent judgments (consistency ratio at or above the threshold)
/// are deliberately NOT represented here; inconsistency is a warning and
/// the derived weights stay usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Comparison matrix not initialized; build it from judgments first")]
    UninitializedMatrix,

    #[error("Priority weights not derived; derive weights before requesting consistency metrics")]
    WeightsNotDerived,

    #[error("Criteria list cannot be empty")]
    EmptyCriteria,

    #[error("Duplicate criterion name: '{0}'")]
    DuplicateCriterion(String),

    #[error("Judgment references unknown criterion: '{0}'")]
    UnknownCriterion(String),

    #[error("Judgment for ('{a}', '{b}') must be positive, got {value}")]
    NonPositiveJudgment { a: String, b: String, value: f64 },

    #[error("Missing judgments for criterion pairs: {}", format_pairs(.pairs))]
    IncompleteJudgments { pairs: Vec<(String, String)> },
}

fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("({}, {})", a, b))
        .collect::<Vec<_>>()
        .join(", ")
}
