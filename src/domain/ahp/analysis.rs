//! Staged AHP analysis - matrix, weights, and consistency for one decision.

use serde::Serialize;

use super::{
    AhpError, ComparisonMatrix, ConsistencyMetrics, CriteriaSet, Judgments, Weights,
    DEFAULT_CONSISTENCY_THRESHOLD,
};

/// One AHP analysis over a fixed criteria ordering.
///
/// The stages run matrix -> weights -> consistency. Skipping a stage is a
/// precondition violation surfaced immediately: weights before a matrix
/// is `UninitializedMatrix`, consistency before weights is
/// `WeightsNotDerived`. Each stage result is kept so later queries and
/// the summary can read them without recomputation.
#[derive(Debug, Clone)]
pub struct AhpAnalysis {
    criteria: CriteriaSet,
    matrix: Option<ComparisonMatrix>,
    weights: Option<Weights>,
    metrics: Option<ConsistencyMetrics>,
}

/// Snapshot of an analysis for reporting and serialization.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub criteria: Vec<String>,
    pub weights: Option<Vec<f64>>,
    pub consistency_ratio: Option<f64>,
    pub is_consistent: Option<bool>,
    pub comparison_matrix: Option<Vec<Vec<f64>>>,
}

impl AhpAnalysis {
    /// Starts an analysis over the given criteria.
    pub fn new(criteria: CriteriaSet) -> Self {
        Self {
            criteria,
            matrix: None,
            weights: None,
            metrics: None,
        }
    }

    /// Returns the criteria ordering.
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Builds the comparison matrix from judgments, resetting any
    /// previously derived weights and metrics.
    pub fn build_matrix(&mut self, judgments: &Judgments) -> Result<&ComparisonMatrix, AhpError> {
        let matrix = ComparisonMatrix::build(self.criteria.clone(), judgments)?;
        self.weights = None;
        self.metrics = None;
        Ok(self.matrix.insert(matrix))
    }

    /// Strict variant of [`AhpAnalysis::build_matrix`]: fails on unset
    /// judgment pairs instead of defaulting them to equal importance.
    pub fn build_matrix_strict(
        &mut self,
        judgments: &Judgments,
    ) -> Result<&ComparisonMatrix, AhpError> {
        let matrix = ComparisonMatrix::build_strict(self.criteria.clone(), judgments)?;
        self.weights = None;
        self.metrics = None;
        Ok(self.matrix.insert(matrix))
    }

    /// Returns the matrix, if built.
    pub fn matrix(&self) -> Option<&ComparisonMatrix> {
        self.matrix.as_ref()
    }

    /// Derives the priority weights from the built matrix.
    pub fn derive_weights(&mut self) -> Result<&Weights, AhpError> {
        let matrix = self.matrix.as_ref().ok_or(AhpError::UninitializedMatrix)?;
        let weights = Weights::derive(matrix);
        Ok(self.weights.insert(weights))
    }

    /// Returns the weights, if derived.
    pub fn weights(&self) -> Option<&Weights> {
        self.weights.as_ref()
    }

    /// Evaluates (and caches) the consistency metrics.
    ///
    /// Requires weights to have been derived first, mirroring the staged
    /// call protocol; `lambda_max` itself is recomputed from the matrix.
    pub fn consistency_metrics(&mut self) -> Result<ConsistencyMetrics, AhpError> {
        if self.weights.is_none() {
            return Err(AhpError::WeightsNotDerived);
        }
        let matrix = self.matrix.as_ref().ok_or(AhpError::UninitializedMatrix)?;
        let metrics = *self
            .metrics
            .get_or_insert_with(|| ConsistencyMetrics::evaluate(matrix));
        Ok(metrics)
    }

    /// Checks the consistency ratio against a threshold.
    pub fn is_consistent(&mut self, threshold: f64) -> Result<bool, AhpError> {
        Ok(self.consistency_metrics()?.is_consistent(threshold))
    }

    /// Checks against the conventional 0.1 threshold.
    pub fn is_acceptable(&mut self) -> Result<bool, AhpError> {
        self.is_consistent(DEFAULT_CONSISTENCY_THRESHOLD)
    }

    /// Returns a snapshot of whatever stages have completed.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            criteria: self.criteria.names().to_vec(),
            weights: self.weights.as_ref().map(|w| w.values().to_vec()),
            consistency_ratio: self.metrics.map(|m| m.consistency_ratio),
            is_consistent: self.metrics.map(|m| m.is_acceptable()),
            comparison_matrix: self.matrix.as_ref().map(|m| m.to_rows()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CriteriaSet {
        CriteriaSet::new(["A", "B", "C"]).unwrap()
    }

    fn sample_judgments() -> Judgments {
        Judgments::from_triples([("A", "B", 3.0), ("A", "C", 5.0), ("B", "C", 2.0)]).unwrap()
    }

    #[test]
    fn weights_before_matrix_fail() {
        let mut analysis = AhpAnalysis::new(abc());
        assert_eq!(
            analysis.derive_weights().unwrap_err(),
            AhpError::UninitializedMatrix
        );
    }

    #[test]
    fn consistency_before_weights_fails() {
        let mut analysis = AhpAnalysis::new(abc());
        analysis.build_matrix(&sample_judgments()).unwrap();
        assert_eq!(
            analysis.consistency_metrics().unwrap_err(),
            AhpError::WeightsNotDerived
        );
    }

    #[test]
    fn full_staged_run_succeeds() {
        let mut analysis = AhpAnalysis::new(abc());
        analysis.build_matrix(&sample_judgments()).unwrap();
        analysis.derive_weights().unwrap();
        let metrics = analysis.consistency_metrics().unwrap();

        assert!(metrics.consistency_ratio.is_finite());
        assert!(metrics.consistency_ratio >= 0.0);
        assert!(analysis.is_acceptable().unwrap());
    }

    #[test]
    fn rebuilding_the_matrix_resets_later_stages() {
        let mut analysis = AhpAnalysis::new(abc());
        analysis.build_matrix(&sample_judgments()).unwrap();
        analysis.derive_weights().unwrap();

        analysis.build_matrix(&Judgments::new()).unwrap();
        assert!(analysis.weights().is_none());
        assert_eq!(
            analysis.consistency_metrics().unwrap_err(),
            AhpError::WeightsNotDerived
        );
    }

    #[test]
    fn summary_tracks_completed_stages() {
        let mut analysis = AhpAnalysis::new(abc());
        let summary = analysis.summary();
        assert_eq!(summary.criteria, vec!["A", "B", "C"]);
        assert!(summary.weights.is_none());
        assert!(summary.comparison_matrix.is_none());

        analysis.build_matrix(&sample_judgments()).unwrap();
        analysis.derive_weights().unwrap();
        analysis.consistency_metrics().unwrap();

        let summary = analysis.summary();
        assert_eq!(summary.weights.unwrap().len(), 3);
        assert_eq!(summary.is_consistent, Some(true));
        assert_eq!(summary.comparison_matrix.unwrap().len(), 3);
    }
}
