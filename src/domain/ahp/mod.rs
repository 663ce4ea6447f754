//! AHP weight-derivation engine.
//!
//! Implements single-level Analytic Hierarchy Process weighting: a
//! reciprocal pairwise comparison matrix is built from sparse judgments
//! over an ordered criteria set, priority weights are extracted as the
//! matrix's principal eigenvector, and the judgments are validated with
//! Saaty's consistency ratio. Inconsistency is reported as a warning,
//! never an error.

mod analysis;
mod consistency;
mod criteria;
mod errors;
mod judgments;
mod matrix;
mod solver;

pub use analysis::{AhpAnalysis, AnalysisSummary};
pub use consistency::{random_index, ConsistencyMetrics, DEFAULT_CONSISTENCY_THRESHOLD};
pub use criteria::CriteriaSet;
pub use errors::AhpError;
pub use judgments::{saaty_label, Judgments, SAATY_MAX, SAATY_MIN};
pub use matrix::ComparisonMatrix;
pub use solver::Weights;
