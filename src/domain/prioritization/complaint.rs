//! Complaint records - the alternatives under evaluation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

/// Severity label attached by the intake system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    /// Risk multiplier applied to the base safety score.
    pub fn multiplier(&self) -> f64 {
        match self {
            Severity::Critical => 1.0,
            Severity::High => 0.8,
            Severity::Medium => 0.5,
            Severity::Low => 0.2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", label)
    }
}

/// Resolution complexity estimated by the receiving department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    /// Resource factor: low complexity leaves more resources free.
    pub fn factor(&self) -> f64 {
        match self {
            Complexity::Low => 0.8,
            Complexity::Medium => 0.5,
            Complexity::High => 0.2,
        }
    }
}

/// A service complaint with its descriptive attributes and named
/// per-criterion scores.
///
/// Descriptive attributes are passed through untouched for downstream
/// reporting; only `scores` participates in prioritization. Scores are
/// keyed by criterion name and expected in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub department: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub affected_people: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub department_load: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub scores: BTreeMap<String, Score>,
}

impl Complaint {
    /// Returns the score for a criterion, if set.
    pub fn score_for(&self, criterion: &str) -> Option<Score> {
        self.scores.get(criterion).copied()
    }

    /// Sets (or replaces) the score for a criterion.
    pub fn set_score(&mut self, criterion: impl Into<String>, score: Score) {
        self.scores.insert(criterion.into(), score);
    }

    /// Returns true if the complaint has a score for the criterion.
    pub fn has_score(&self, criterion: &str) -> bool {
        self.scores.contains_key(criterion)
    }
}
