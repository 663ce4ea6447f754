//! Reciprocal pairwise comparison matrix.

use ndarray::Array2;

use super::{AhpError, CriteriaSet, Judgments};

/// A square reciprocal comparison matrix over an ordered criteria set.
///
/// Invariants: the diagonal is exactly 1, `m[i][j] * m[j][i] == 1` for
/// every pair, and every entry is strictly positive. The matrix is
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    criteria: CriteriaSet,
    cells: Array2<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from sparse judgments over the criteria.
    ///
    /// Pairs with no judgment default to 1 (equal importance). Callers
    /// must supply judgments for every pair they intend to weight; an
    /// unset pair silently collapses to equal importance. Use
    /// [`ComparisonMatrix::build_strict`] to fail on unset pairs instead.
    pub fn build(criteria: CriteriaSet, judgments: &Judgments) -> Result<Self, AhpError> {
        Self::build_inner(criteria, judgments, false)
    }

    /// Builds a matrix, failing with `IncompleteJudgments` if any
    /// criterion pair has no judgment.
    pub fn build_strict(criteria: CriteriaSet, judgments: &Judgments) -> Result<Self, AhpError> {
        Self::build_inner(criteria, judgments, true)
    }

    fn build_inner(
        criteria: CriteriaSet,
        judgments: &Judgments,
        strict: bool,
    ) -> Result<Self, AhpError> {
        // Boundary validation: every judgment must name known criteria.
        for (a, b, _) in judgments.iter() {
            for name in [a, b] {
                if !criteria.contains(name) {
                    return Err(AhpError::UnknownCriterion(name.to_string()));
                }
            }
        }

        let n = criteria.len();
        let mut cells = Array2::from_elem((n, n), 1.0);
        let mut missing = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                match judgments.value_between(criteria.name_at(i), criteria.name_at(j)) {
                    Some(value) => {
                        cells[[i, j]] = value;
                        cells[[j, i]] = 1.0 / value;
                    }
                    None if strict => {
                        missing.push((
                            criteria.name_at(i).to_string(),
                            criteria.name_at(j).to_string(),
                        ));
                    }
                    None => {}
                }
            }
        }

        if !missing.is_empty() {
            return Err(AhpError::IncompleteJudgments { pairs: missing });
        }

        Ok(Self { criteria, cells })
    }

    /// Returns the criteria this matrix was built over.
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Returns the matrix dimension.
    pub fn n(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the entry at `(row, col)`.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.cells[[row, col]]
    }

    /// Returns the matrix rows for reporting.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    pub(crate) fn cells(&self) -> &Array2<f64> {
        &self.cells
    }
}
