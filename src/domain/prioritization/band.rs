//! Priority bands derived from score quartiles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority band for a ranked complaint.
///
/// Bands partition a result set by the quartiles of its priority scores:
/// `Critical` at or above the 75th percentile, `High` from the median up
/// to it, `Medium` from the 25th percentile up to the median, `Low`
/// below that. The declaration order doubles as the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBand {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityBand {
    /// All bands in display order, highest priority first.
    pub const ALL: [PriorityBand; 4] = [
        PriorityBand::Critical,
        PriorityBand::High,
        PriorityBand::Medium,
        PriorityBand::Low,
    ];

    /// Assigns the band for a score given the quartile boundaries.
    ///
    /// The half-open boundaries make the assignment exhaustive and
    /// exclusive: every score lands in exactly one band.
    pub fn classify(score: f64, p25: f64, p50: f64, p75: f64) -> Self {
        if score >= p75 {
            PriorityBand::Critical
        } else if score >= p50 {
            PriorityBand::High
        } else if score >= p25 {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityBand::Critical => "Critical",
            PriorityBand::High => "High",
            PriorityBand::Medium => "Medium",
            PriorityBand::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_half_open_boundaries() {
        assert_eq!(PriorityBand::classify(0.9, 0.2, 0.5, 0.8), PriorityBand::Critical);
        assert_eq!(PriorityBand::classify(0.8, 0.2, 0.5, 0.8), PriorityBand::Critical);
        assert_eq!(PriorityBand::classify(0.79, 0.2, 0.5, 0.8), PriorityBand::High);
        assert_eq!(PriorityBand::classify(0.5, 0.2, 0.5, 0.8), PriorityBand::High);
        assert_eq!(PriorityBand::classify(0.3, 0.2, 0.5, 0.8), PriorityBand::Medium);
        assert_eq!(PriorityBand::classify(0.2, 0.2, 0.5, 0.8), PriorityBand::Medium);
        assert_eq!(PriorityBand::classify(0.1, 0.2, 0.5, 0.8), PriorityBand::Low);
    }

    #[test]
    fn equal_quartiles_send_everything_to_critical() {
        // A flat score distribution collapses the quartiles.
        assert_eq!(PriorityBand::classify(0.5, 0.5, 0.5, 0.5), PriorityBand::Critical);
    }

    #[test]
    fn bands_order_highest_first() {
        assert!(PriorityBand::Critical < PriorityBand::Low);
        assert_eq!(PriorityBand::ALL[0], PriorityBand::Critical);
        assert_eq!(PriorityBand::ALL[3], PriorityBand::Low);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PriorityBand::Critical).unwrap(),
            r#""critical""#
        );
    }
}
