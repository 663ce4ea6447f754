//! Criteria score heuristics for complaint enrichment.
//!
//! Maps raw complaint attributes (type, severity, affected people, age,
//! cost, department load) onto the five default criteria, each scored in
//! [0, 1]. The reference time is always passed in explicitly; nothing
//! here reads the clock.

use chrono::{DateTime, Utc};

use crate::domain::ahp::CriteriaSet;
use crate::domain::foundation::Score;
use crate::domain::prioritization::{Complaint, Complexity, Severity, DEFAULT_CRITERIA};

/// Complaint types that endanger life or property outright.
pub const HIGH_RISK_TYPES: [&str; 4] = [
    "gas_leak",
    "electrical_hazard",
    "building_collapse",
    "fire_hazard",
];

/// Complaint types with indirect or localized safety exposure.
pub const MEDIUM_RISK_TYPES: [&str; 3] = ["water_contamination", "broken_traffic_light", "pothole"];

/// Nuisance-level complaint types.
pub const LOW_RISK_TYPES: [&str; 3] = ["noise_complaint", "graffiti", "littering"];

/// Public safety risk from complaint type and severity.
pub fn safety_score(kind: &str, severity: Severity) -> Score {
    let kind = kind.to_lowercase();
    let base = if HIGH_RISK_TYPES.contains(&kind.as_str()) {
        0.9
    } else if MEDIUM_RISK_TYPES.contains(&kind.as_str()) {
        0.6
    } else if LOW_RISK_TYPES.contains(&kind.as_str()) {
        0.3
    } else {
        0.5
    };
    Score::new(base * severity.multiplier())
}

/// Scale of impact from the number of people affected, on a stepped
/// logarithmic-style bracket.
pub fn impact_score(affected_people: u32) -> Score {
    let value = match affected_people {
        0 => 0.0,
        1..=10 => 0.2,
        11..=50 => 0.4,
        51..=100 => 0.6,
        101..=500 => 0.8,
        _ => 1.0,
    };
    Score::new(value)
}

/// Urgency from complaint age, or from deadline proximity when a
/// deadline is known.
///
/// Without a deadline, fresh complaints score highest and the score
/// decays over a month toward a 0.3 floor.
pub fn urgency_score(
    created_at: DateTime<Utc>,
    deadline_hours: Option<u32>,
    now: DateTime<Utc>,
) -> Score {
    let hours_elapsed = (now - created_at).num_seconds().max(0) as f64 / 3600.0;

    let value = match deadline_hours {
        Some(deadline) if deadline > 0 => (hours_elapsed / deadline as f64).min(1.0),
        _ => {
            if hours_elapsed < 24.0 {
                0.9
            } else if hours_elapsed < 72.0 {
                0.7
            } else if hours_elapsed < 168.0 {
                0.5
            } else {
                (1.0 - hours_elapsed / (30.0 * 24.0)).max(0.3)
            }
        }
    };
    Score::new(value)
}

/// Resource requirements, inverted: higher means fewer resources needed.
pub fn resource_score(estimated_cost: f64, complexity: Complexity) -> Score {
    let cost_score = (1.0 - (estimated_cost / 10_000.0).min(1.0)).max(0.0);
    Score::new((cost_score + complexity.factor()) / 2.0)
}

/// Department capacity from its current active-complaint load.
pub fn capacity_score(department_load: u32) -> Score {
    let value = match department_load {
        0..=5 => 1.0,
        6..=10 => 0.8,
        11..=20 => 0.6,
        21..=30 => 0.4,
        _ => 0.2,
    };
    Score::new(value)
}

/// Fills a complaint's scores for all five default criteria from its
/// raw attributes. Existing scores for those criteria are replaced.
pub fn enrich_complaint(complaint: &mut Complaint, now: DateTime<Utc>) {
    let [safety, impact, urgency, resources, capacity] = DEFAULT_CRITERIA;
    let scores = [
        (safety, safety_score(&complaint.kind, complaint.severity)),
        (impact, impact_score(complaint.affected_people)),
        (urgency, urgency_score(complaint.created_at, None, now)),
        (
            resources,
            resource_score(complaint.estimated_cost, complaint.complexity),
        ),
        (capacity, capacity_score(complaint.department_load)),
    ];
    for (criterion, score) in scores {
        complaint.set_score(criterion, score);
    }
}

/// Enriches a whole batch against one reference time.
pub fn enrich_all(complaints: &mut [Complaint], now: DateTime<Utc>) {
    for complaint in complaints.iter_mut() {
        enrich_complaint(complaint, now);
    }
}

/// Min-max normalizes each criterion's scores across the batch.
///
/// Records without a score for a criterion are left untouched. When a
/// criterion's scores are all equal the column collapses to 0.5.
pub fn normalize_scores(complaints: &mut [Complaint], criteria: &CriteriaSet) {
    for criterion in criteria.iter() {
        let values: Vec<f64> = complaints
            .iter()
            .filter_map(|c| c.score_for(criterion))
            .map(|s| s.value())
            .collect();
        if values.is_empty() {
            continue;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for complaint in complaints.iter_mut() {
            if let Some(score) = complaint.score_for(criterion) {
                let normalized = if max > min {
                    (score.value() - min) / (max - min)
                } else {
                    0.5
                };
                complaint.set_score(criterion, Score::new(normalized));
            }
        }
    }
}
