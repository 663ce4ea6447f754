//! Priority weight derivation via the principal eigenvector method.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, CriteriaSet};

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Normalized priority weights, one per criterion, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    criteria: CriteriaSet,
    values: Vec<f64>,
}

impl Weights {
    /// Derives the weight vector from a comparison matrix.
    ///
    /// The principal eigenvector of a strictly positive reciprocal matrix
    /// is the eigenvector of the eigenvalue with the largest real part
    /// (Perron-Frobenius), recovered here by power iteration. Eigenvectors
    /// are defined up to sign: if the raw vector sums negative it is
    /// flipped before normalization, and floating-point sign artifacts are
    /// clamped to zero, so every weight is non-negative and the vector
    /// sums to 1.
    pub fn derive(matrix: &ComparisonMatrix) -> Self {
        let (_, eigenvector) = principal_eigenpair(matrix);
        let values = normalize_to_unit_sum(eigenvector.to_vec());
        Self {
            criteria: matrix.criteria().clone(),
            values,
        }
    }

    /// Returns the criteria the weights were derived for.
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Returns the weight values in criteria order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the weight for a criterion name, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.criteria.index_of(name).map(|i| self.values[i])
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; weights cover at least one criterion.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(criterion, weight)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.criteria.iter().zip(self.values.iter().copied())
    }
}

/// Computes the principal eigenpair `(lambda_max, eigenvector)` of the
/// matrix by power iteration with L1 renormalization.
///
/// `lambda_max` is recovered as `sum(A*v) / sum(v)` once the iteration
/// settles, which equals the largest-real-part eigenvalue for a strictly
/// positive matrix.
pub(crate) fn principal_eigenpair(matrix: &ComparisonMatrix) -> (f64, Array1<f64>) {
    let cells = matrix.cells();
    let n = matrix.n();
    let mut vector = Array1::from_elem(n, 1.0 / n as f64);

    for _ in 0..MAX_ITERATIONS {
        let next = cells.dot(&vector);
        let norm: f64 = next.iter().map(|x| x.abs()).sum();
        let next = next / norm;

        let delta = vector
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        vector = next;
        if delta < CONVERGENCE_TOLERANCE {
            break;
        }
    }

    let image = cells.dot(&vector);
    let lambda_max = image.sum() / vector.sum();
    (lambda_max, vector)
}

/// Normalizes a raw eigenvector into a non-negative unit-sum weight
/// vector: flip the overall sign if the sum is negative, clamp residual
/// negative entries to zero, then divide by the sum.
pub(crate) fn normalize_to_unit_sum(mut raw: Vec<f64>) -> Vec<f64> {
    let sum: f64 = raw.iter().sum();
    if sum < 0.0 {
        for value in &mut raw {
            *value = -*value;
        }
    }
    for value in &mut raw {
        if *value < 0.0 {
            *value = 0.0;
        }
    }
    let sum: f64 = raw.iter().sum();
    for value in &mut raw {
        *value /= sum;
    }
    raw
}
