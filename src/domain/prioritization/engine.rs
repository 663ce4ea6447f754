//! Complaint prioritization engine - weights in, ranked complaints out.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use tracing::{info, warn};

use crate::domain::ahp::{
    AhpAnalysis, AhpError, ConsistencyMetrics, CriteriaSet, Judgments, Weights,
    DEFAULT_CONSISTENCY_THRESHOLD,
};

use super::{
    default_criteria, default_judgments, Complaint, PriorityBand, PrioritizeError,
    PrioritizedComplaint, RankedComplaints,
};

/// Caller-facing warning emitted when judgments fail the consistency
/// check. Never fatal: the derived weights remain usable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyWarning {
    pub consistency_ratio: f64,
    pub threshold: f64,
    pub weights: Vec<(String, f64)>,
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Inconsistent pairwise judgments (CR = {:.4}, threshold {:.2}); review your comparisons",
            self.consistency_ratio, self.threshold
        )
    }
}

/// Stateful prioritization facade.
///
/// Holds the current weight vector and the most recent ranked result
/// set; queries read from that state. The heavy lifting is delegated to
/// the immutable [`Weights`] and [`RankedComplaints`] value objects, so
/// callers that prefer explicit threading can use those directly and
/// skip this facade entirely.
#[derive(Debug, Clone)]
pub struct ComplaintPrioritizer {
    weights: Option<Weights>,
    consistency: Option<ConsistencyMetrics>,
    current: Option<RankedComplaints>,
    threshold: f64,
}

impl Default for ComplaintPrioritizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplaintPrioritizer {
    /// Creates an engine with the conventional 0.1 consistency threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_CONSISTENCY_THRESHOLD)
    }

    /// Creates an engine with a custom consistency threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            weights: None,
            consistency: None,
            current: None,
            threshold,
        }
    }

    /// Stores an externally derived weight vector.
    ///
    /// No consistency information accompanies raw weights, so no warning
    /// can be emitted here; prefer [`ComplaintPrioritizer::derive_weights`]
    /// when the judgments are available.
    pub fn set_weights(&mut self, weights: Weights) {
        self.weights = Some(weights);
        self.consistency = None;
    }

    /// Builds a comparison matrix from the judgments, derives weights,
    /// and stores them.
    ///
    /// Returns a [`ConsistencyWarning`] when the judgments fail the
    /// consistency check; the weights are stored and usable either way.
    pub fn derive_weights(
        &mut self,
        criteria: CriteriaSet,
        judgments: &Judgments,
    ) -> Result<Option<ConsistencyWarning>, AhpError> {
        self.derive_weights_inner(criteria, judgments, false)
    }

    /// Strict variant of [`ComplaintPrioritizer::derive_weights`]: fails
    /// with `IncompleteJudgments` when any criterion pair is unset
    /// instead of defaulting it to equal importance.
    pub fn derive_weights_strict(
        &mut self,
        criteria: CriteriaSet,
        judgments: &Judgments,
    ) -> Result<Option<ConsistencyWarning>, AhpError> {
        self.derive_weights_inner(criteria, judgments, true)
    }

    fn derive_weights_inner(
        &mut self,
        criteria: CriteriaSet,
        judgments: &Judgments,
        strict: bool,
    ) -> Result<Option<ConsistencyWarning>, AhpError> {
        let mut analysis = AhpAnalysis::new(criteria);
        if strict {
            analysis.build_matrix_strict(judgments)?;
        } else {
            analysis.build_matrix(judgments)?;
        }
        let weights = analysis.derive_weights()?.clone();
        let metrics = analysis.consistency_metrics()?;

        let warning = if metrics.is_consistent(self.threshold) {
            info!(
                consistency_ratio = metrics.consistency_ratio,
                "pairwise judgments are consistent"
            );
            None
        } else {
            let warning = ConsistencyWarning {
                consistency_ratio: metrics.consistency_ratio,
                threshold: self.threshold,
                weights: weights
                    .iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
            };
            warn!(
                consistency_ratio = metrics.consistency_ratio,
                threshold = self.threshold,
                "{warning}"
            );
            Some(warning)
        };

        self.weights = Some(weights);
        self.consistency = Some(metrics);
        Ok(warning)
    }

    /// Derives and stores weights from the default municipal judgment set.
    pub fn use_default_weights(&mut self) -> Result<Option<ConsistencyWarning>, AhpError> {
        self.derive_weights(default_criteria(), default_judgments())
    }

    /// Returns the stored weights, if any.
    pub fn weights(&self) -> Option<&Weights> {
        self.weights.as_ref()
    }

    /// Returns the consistency metrics of the stored weights, if they
    /// were derived from judgments.
    pub fn consistency(&self) -> Option<&ConsistencyMetrics> {
        self.consistency.as_ref()
    }

    /// Scores, ranks, and bands the complaints under the stored weights.
    ///
    /// Fails with `WeightsNotSet` before weights exist and with
    /// `MissingCriteria` when a record lacks a weighted criterion score.
    /// The result set becomes the engine's current state for the query
    /// operations below.
    pub fn prioritize(
        &mut self,
        records: Vec<Complaint>,
    ) -> Result<&RankedComplaints, PrioritizeError> {
        let weights = self.weights.as_ref().ok_or(PrioritizeError::WeightsNotSet)?;
        let ranked = RankedComplaints::rank(weights, records)?;
        info!(total = ranked.len(), "complaints prioritized");
        Ok(self.current.insert(ranked))
    }

    /// Returns the current ranked result set.
    pub fn results(&self) -> Result<&RankedComplaints, PrioritizeError> {
        self.current.as_ref().ok_or(PrioritizeError::NoResults)
    }

    /// Partitions the current results into priority bands.
    pub fn categorize(
        &self,
    ) -> Result<BTreeMap<PriorityBand, Vec<&PrioritizedComplaint>>, PrioritizeError> {
        Ok(self.results()?.categorize())
    }

    /// Returns the top `n` current results, clamped to the set size.
    pub fn top_n(&self, n: usize) -> Result<&[PrioritizedComplaint], PrioritizeError> {
        Ok(self.results()?.top_n(n))
    }

    /// Returns the current results for one department.
    pub fn by_department(
        &self,
        department: &str,
    ) -> Result<Vec<&PrioritizedComplaint>, PrioritizeError> {
        Ok(self.results()?.by_department(department))
    }

    /// Formats the summary report: weights, consistency status, band
    /// counts, and the top five complaints.
    pub fn summary_report(&self) -> Result<String, PrioritizeError> {
        let weights = self.weights.as_ref().ok_or(PrioritizeError::WeightsNotSet)?;
        let results = self.results()?;
        let counts = results.band_counts();

        let mut report = String::new();
        let rule = "=".repeat(60);
        let line = "-".repeat(60);

        let _ = writeln!(report, "{rule}");
        let _ = writeln!(report, "COMPLAINT PRIORITIZATION SUMMARY REPORT");
        let _ = writeln!(report, "{rule}");
        let _ = writeln!(report);

        let _ = writeln!(report, "CRITERIA WEIGHTS:");
        let _ = writeln!(report, "{line}");
        for (criterion, weight) in weights.iter() {
            let _ = writeln!(
                report,
                "  {:.<40} {:.4} ({:.1}%)",
                criterion,
                weight,
                weight * 100.0
            );
        }
        let _ = writeln!(report);

        match &self.consistency {
            Some(metrics) => {
                let _ = writeln!(report, "Consistency Ratio: {:.4}", metrics.consistency_ratio);
                let status = if metrics.is_consistent(self.threshold) {
                    "[OK] ACCEPTABLE"
                } else {
                    "[X] NOT ACCEPTABLE"
                };
                let _ = writeln!(report, "Consistency Status: {status}");
            }
            None => {
                let _ = writeln!(report, "Consistency Ratio: n/a (weights supplied directly)");
            }
        }
        let _ = writeln!(report);

        let _ = writeln!(report, "PRIORITIZATION STATISTICS:");
        let _ = writeln!(report, "{line}");
        let _ = writeln!(report, "  Total Complaints: {}", results.len());
        for band in PriorityBand::ALL {
            let _ = writeln!(
                report,
                "  {} Priority: {}",
                band.label(),
                counts.get(&band).copied().unwrap_or(0)
            );
        }
        let _ = writeln!(report);

        let _ = writeln!(report, "TOP 5 PRIORITY COMPLAINTS:");
        let _ = writeln!(report, "{line}");
        for result in results.top_n(5) {
            let title: String = result.complaint.title.chars().take(40).collect();
            let _ = writeln!(
                report,
                "  #{} [{}] {}",
                result.priority_rank, result.complaint.id, title
            );
            let _ = writeln!(report, "      Priority Score: {:.4}", result.priority_score);
        }
        let _ = writeln!(report);
        let _ = write!(report, "{rule}");

        Ok(report)
    }
}
