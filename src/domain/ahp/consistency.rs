//! Consistency validation for comparison matrices (Saaty, 1980).

use serde::{Deserialize, Serialize};

use super::solver::principal_eigenpair;
use super::ComparisonMatrix;

/// Conventional upper bound for an acceptable consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Random Index values for matrix sizes 1..=10 (Saaty, 1980).
const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the Random Index for an n x n matrix.
///
/// Sizes above 10 fall back to the n=10 value as a conservative bound.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1..=10 => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[9],
    }
}

/// Consistency metrics derived from a comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    /// Largest real part among the matrix's eigenvalues.
    pub lambda_max: f64,
    /// `(lambda_max - n) / (n - 1)`; 0 for n <= 1.
    pub consistency_index: f64,
    /// Random Index for the matrix size.
    pub random_index: f64,
    /// `CI / RI`, or 0 when RI is 0 (n <= 2).
    pub consistency_ratio: f64,
}

impl ConsistencyMetrics {
    /// Evaluates the metrics from a matrix.
    ///
    /// `lambda_max` is recomputed from the matrix itself, independent of
    /// any previously derived weight vector. `lambda_max >= n` holds for
    /// every reciprocal matrix, so a marginally negative CI can only be a
    /// floating-point artifact and is clamped to zero.
    pub fn evaluate(matrix: &ComparisonMatrix) -> Self {
        let n = matrix.n();
        let (lambda_max, _) = principal_eigenpair(matrix);

        let consistency_index = if n <= 1 {
            0.0
        } else {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        };
        let random_index = random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        Self {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
        }
    }

    /// Returns true if the consistency ratio is below the threshold.
    ///
    /// A false result is a caller-facing warning, never a hard failure;
    /// the weight vector stays usable regardless.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }

    /// Checks against the conventional 0.1 threshold.
    pub fn is_acceptable(&self) -> bool {
        self.is_consistent(DEFAULT_CONSISTENCY_THRESHOLD)
    }
}
