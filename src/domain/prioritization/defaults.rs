//! Default criteria and judgments for municipal complaint triage.

use once_cell::sync::Lazy;

use crate::domain::ahp::{CriteriaSet, Judgments};

/// The fixed five-criterion ordering used for complaint prioritization.
pub const DEFAULT_CRITERIA: [&str; 5] = [
    "Public Safety Risk",
    "Scale of Impact",
    "Urgency Level",
    "Resource Requirements",
    "Department Capacity",
];

/// Default pairwise judgments reflecting typical municipal priorities:
/// public safety and urgency dominate resource considerations.
static DEFAULT_JUDGMENT_VALUES: [(&str, &str, f64); 10] = [
    ("Public Safety Risk", "Scale of Impact", 3.0),
    ("Public Safety Risk", "Urgency Level", 2.0),
    ("Public Safety Risk", "Resource Requirements", 5.0),
    ("Public Safety Risk", "Department Capacity", 4.0),
    ("Scale of Impact", "Urgency Level", 1.0),
    ("Scale of Impact", "Resource Requirements", 3.0),
    ("Scale of Impact", "Department Capacity", 2.0),
    ("Urgency Level", "Resource Requirements", 4.0),
    ("Urgency Level", "Department Capacity", 3.0),
    ("Resource Requirements", "Department Capacity", 1.0),
];

static DEFAULT_JUDGMENTS: Lazy<Judgments> = Lazy::new(|| {
    Judgments::from_triples(DEFAULT_JUDGMENT_VALUES)
        .expect("default judgment values are positive")
});

/// Returns the default criteria set.
pub fn default_criteria() -> CriteriaSet {
    CriteriaSet::new(DEFAULT_CRITERIA).expect("default criteria are non-empty and unique")
}

/// Returns the default judgment set.
pub fn default_judgments() -> &'static Judgments {
    &DEFAULT_JUDGMENTS
}
