//! Ranked result set - scoring, dense ranking, and quartile banding.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ahp::Weights;

use super::{Complaint, PriorityBand, PrioritizeError};

/// A complaint augmented with its priority score, dense rank, and band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedComplaint {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub priority_score: f64,
    pub priority_rank: u32,
    pub priority_band: PriorityBand,
}

/// An immutable ranked result set.
///
/// Results are sorted by priority score descending, ties keeping input
/// order. All read-only queries (top-N, per-department, banding) are
/// methods here, so callers thread the value through explicitly instead
/// of relying on hidden engine state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedComplaints {
    results: Vec<PrioritizedComplaint>,
}

impl RankedComplaints {
    /// Scores, ranks, and bands a batch of complaints under the weights.
    ///
    /// Fails with `MissingCriteria` (naming the absent criterion columns)
    /// if any record lacks a score for a weighted criterion. The priority
    /// score is the dot product of the weight vector and the record's
    /// scores in criteria order; ranks are dense over descending score
    /// (ties share a rank, no gaps); bands come from the quartiles of the
    /// full score distribution.
    pub fn rank(weights: &Weights, records: Vec<Complaint>) -> Result<Self, PrioritizeError> {
        let missing: Vec<String> = weights
            .criteria()
            .iter()
            .filter(|criterion| records.iter().any(|r| !r.has_score(criterion)))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(PrioritizeError::MissingCriteria { criteria: missing });
        }

        let mut scored: Vec<(Complaint, f64)> = records
            .into_iter()
            .map(|record| {
                let score = weights
                    .iter()
                    .map(|(criterion, weight)| {
                        // Coverage was checked above.
                        weight * record.score_for(criterion).map(|s| s.value()).unwrap_or(0.0)
                    })
                    .sum();
                (record, score)
            })
            .collect();

        // Stable sort: equal scores keep their input order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let (p25, p50, p75) = quartiles(&scored);

        let mut results = Vec::with_capacity(scored.len());
        let mut rank = 0u32;
        let mut previous_score = f64::NAN;
        for (complaint, score) in scored {
            if score != previous_score {
                rank += 1;
                previous_score = score;
            }
            results.push(PrioritizedComplaint {
                priority_band: PriorityBand::classify(score, p25, p50, p75),
                priority_score: score,
                priority_rank: rank,
                complaint,
            });
        }

        Ok(Self { results })
    }

    /// Returns the results in rank order.
    pub fn results(&self) -> &[PrioritizedComplaint] {
        &self.results
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the results in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &PrioritizedComplaint> {
        self.results.iter()
    }

    /// Returns the first `n` results, clamped to the set size.
    pub fn top_n(&self, n: usize) -> &[PrioritizedComplaint] {
        &self.results[..n.min(self.results.len())]
    }

    /// Returns the results for one department, rank order preserved.
    pub fn by_department(&self, department: &str) -> Vec<&PrioritizedComplaint> {
        self.filter_by(|c| c.department == department)
    }

    /// Returns the results matching an arbitrary predicate on the
    /// underlying complaint, rank order preserved.
    pub fn filter_by<F>(&self, predicate: F) -> Vec<&PrioritizedComplaint>
    where
        F: Fn(&Complaint) -> bool,
    {
        self.results
            .iter()
            .filter(|r| predicate(&r.complaint))
            .collect()
    }

    /// Partitions the results into priority bands.
    ///
    /// Every result lands in exactly one band; all four bands are present
    /// in the mapping even when empty.
    pub fn categorize(&self) -> BTreeMap<PriorityBand, Vec<&PrioritizedComplaint>> {
        let mut bands: BTreeMap<PriorityBand, Vec<&PrioritizedComplaint>> = PriorityBand::ALL
            .iter()
            .map(|&band| (band, Vec::new()))
            .collect();
        for result in &self.results {
            bands.entry(result.priority_band).or_default().push(result);
        }
        bands
    }

    /// Returns the number of results per band.
    pub fn band_counts(&self) -> BTreeMap<PriorityBand, usize> {
        self.categorize()
            .into_iter()
            .map(|(band, entries)| (band, entries.len()))
            .collect()
    }
}

/// Quartile boundaries `(p25, p50, p75)` of the scored batch.
fn quartiles(scored: &[(Complaint, f64)]) -> (f64, f64, f64) {
    if scored.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let mut ascending: Vec<f64> = scored.iter().map(|(_, s)| *s).collect();
    ascending.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    (
        percentile(&ascending, 0.25),
        percentile(&ascending, 0.50),
        percentile(&ascending, 0.75),
    )
}

/// Linear-interpolation percentile over values sorted ascending.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
