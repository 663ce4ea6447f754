//! Score value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A criterion score between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0.0);

    /// Maximum score.
    pub const MAX: Self = Self(1.0);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Score, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("score", "not a finite number"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_valid_values() {
        assert_eq!(Score::new(0.0).value(), 0.0);
        assert_eq!(Score::new(0.5).value(), 0.5);
        assert_eq!(Score::new(1.0).value(), 1.0);
    }

    #[test]
    fn score_new_clamps_out_of_range() {
        assert_eq!(Score::new(1.5).value(), 1.0);
        assert_eq!(Score::new(-0.3).value(), 0.0);
    }

    #[test]
    fn score_try_new_accepts_valid_values() {
        assert!(Score::try_new(0.0).is_ok());
        assert!(Score::try_new(0.75).is_ok());
        assert!(Score::try_new(1.0).is_ok());
    }

    #[test]
    fn score_try_new_rejects_out_of_range() {
        let result = Score::try_new(1.2);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "score");
                assert_eq!(actual, 1.2);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn score_try_new_rejects_non_finite() {
        assert!(Score::try_new(f64::NAN).is_err());
        assert!(Score::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn score_displays_four_decimals() {
        assert_eq!(format!("{}", Score::new(0.5)), "0.5000");
    }

    #[test]
    fn score_serializes_transparently() {
        let score = Score::new(0.85);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "0.85");

        let back: Score = serde_json::from_str("0.85").unwrap();
        assert_eq!(back, score);
    }
}
