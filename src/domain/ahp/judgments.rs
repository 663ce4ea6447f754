//! Sparse pairwise judgments keyed by unordered criterion-name pairs.

use std::collections::HashMap;

use tracing::debug;

use super::AhpError;

/// Lower bound of the classical Saaty comparison scale.
pub const SAATY_MIN: f64 = 1.0 / 9.0;

/// Upper bound of the classical Saaty comparison scale.
pub const SAATY_MAX: f64 = 9.0;

/// A sparse set of pairwise importance judgments.
///
/// A judgment `(a, b) -> v` reads "a is v times as important as b".
/// Lookups are orientation-insensitive: asking for `(b, a)` returns the
/// reciprocal `1/v`. Values are expected on the Saaty scale
/// [`SAATY_MIN`, `SAATY_MAX`]; values outside the scale are accepted but
/// discouraged, since they produce matrices outside the classical scale.
/// Non-positive values are rejected outright.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Judgments {
    values: HashMap<(String, String), f64>,
}

impl Judgments {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a judgment set from `(a, b, value)` triples.
    pub fn from_triples<I, S>(triples: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        let mut judgments = Self::new();
        for (a, b, value) in triples {
            judgments.insert(a, b, value)?;
        }
        Ok(judgments)
    }

    /// Records a judgment: `a` is `value` times as important as `b`.
    ///
    /// Fails with `NonPositiveJudgment` for zero, negative, or non-finite
    /// values. Re-inserting a pair (in either orientation) replaces the
    /// previous value.
    pub fn insert(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        value: f64,
    ) -> Result<(), AhpError> {
        let a = a.into();
        let b = b.into();
        if !value.is_finite() || value <= 0.0 {
            return Err(AhpError::NonPositiveJudgment { a, b, value });
        }
        if !(SAATY_MIN..=SAATY_MAX).contains(&value) {
            debug!(%a, %b, value, "judgment outside the classical Saaty scale");
        }
        // One stored orientation per pair.
        self.values.remove(&(b.clone(), a.clone()));
        self.values.insert((a, b), value);
        Ok(())
    }

    /// Returns the judgment for `(a, b)` in that orientation, consulting
    /// the reciprocal of a `(b, a)` entry when needed.
    pub fn value_between(&self, a: &str, b: &str) -> Option<f64> {
        if let Some(v) = self.values.get(&(a.to_string(), b.to_string())) {
            return Some(*v);
        }
        self.values
            .get(&(b.to_string(), a.to_string()))
            .map(|v| 1.0 / v)
    }

    /// Returns true if a judgment exists for the pair in either orientation.
    pub fn contains_pair(&self, a: &str, b: &str) -> bool {
        self.value_between(a, b).is_some()
    }

    /// Iterates over stored `(a, b, value)` judgments.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.values
            .iter()
            .map(|((a, b), v)| (a.as_str(), b.as_str(), *v))
    }

    /// Returns the number of stored judgments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no judgments are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Textual interpretation of a judgment value on the Saaty scale.
pub fn saaty_label(value: f64) -> &'static str {
    match value.round() as i64 {
        1 => "Equal importance",
        2 => "Weak or slight",
        3 => "Moderate importance",
        4 => "Moderate plus",
        5 => "Strong importance",
        6 => "Strong plus",
        7 => "Very strong importance",
        8 => "Very, very strong",
        9 => "Extreme importance",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_between_returns_reciprocal_for_reversed_pair() {
        let mut judgments = Judgments::new();
        judgments.insert("A", "B", 3.0).unwrap();

        assert_eq!(judgments.value_between("A", "B"), Some(3.0));
        assert_eq!(judgments.value_between("B", "A"), Some(1.0 / 3.0));
        assert_eq!(judgments.value_between("A", "C"), None);
    }

    #[test]
    fn insert_rejects_non_positive_values() {
        let mut judgments = Judgments::new();
        assert!(judgments.insert("A", "B", 0.0).is_err());
        assert!(judgments.insert("A", "B", -3.0).is_err());
        assert!(judgments.insert("A", "B", f64::NAN).is_err());
    }

    #[test]
    fn insert_accepts_values_outside_saaty_scale() {
        // Permitted but discouraged: the matrix falls outside the 1/9..9 scale.
        let mut judgments = Judgments::new();
        assert!(judgments.insert("A", "B", 12.0).is_ok());
        assert_eq!(judgments.value_between("A", "B"), Some(12.0));
    }

    #[test]
    fn reinserting_reversed_pair_replaces_previous_value() {
        let mut judgments = Judgments::new();
        judgments.insert("A", "B", 3.0).unwrap();
        judgments.insert("B", "A", 2.0).unwrap();

        assert_eq!(judgments.len(), 1);
        assert_eq!(judgments.value_between("B", "A"), Some(2.0));
        assert_eq!(judgments.value_between("A", "B"), Some(0.5));
    }

    #[test]
    fn from_triples_collects_all_pairs() {
        let judgments =
            Judgments::from_triples([("A", "B", 3.0), ("A", "C", 5.0), ("B", "C", 2.0)]).unwrap();
        assert_eq!(judgments.len(), 3);
        assert!(judgments.contains_pair("C", "A"));
    }

    #[test]
    fn saaty_labels_match_the_scale() {
        assert_eq!(saaty_label(1.0), "Equal importance");
        assert_eq!(saaty_label(3.0), "Moderate importance");
        assert_eq!(saaty_label(5.0), "Strong importance");
        assert_eq!(saaty_label(9.0), "Extreme importance");
        assert_eq!(saaty_label(2.7), "Moderate importance");
        assert_eq!(saaty_label(5.2), "Strong importance");
        assert_eq!(saaty_label(11.0), "Unknown");
    }
}
