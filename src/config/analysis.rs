//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Analysis tuning knobs
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Consistency ratio threshold for the judgment warning
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// How many top complaints to surface in the pipeline output
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Fail on judgment sets that leave criterion pairs unset instead of
    /// defaulting them to equal importance
    #[serde(default)]
    pub strict_judgments: bool,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.consistency_threshold.is_finite()
            || self.consistency_threshold <= 0.0
            || self.consistency_threshold > 1.0
        {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            top_n: default_top_n(),
            strict_judgments: false,
        }
    }
}

fn default_consistency_threshold() -> f64 {
    0.1
}

fn default_top_n() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.consistency_threshold, 0.1);
        assert_eq!(config.top_n, 10);
        assert!(!config.strict_judgments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let config = AnalysisConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTopN)
        ));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        for threshold in [0.0, -0.1, 1.5, f64::NAN] {
            let config = AnalysisConfig {
                consistency_threshold: threshold,
                ..Default::default()
            };
            assert!(
                config.validate().is_err(),
                "threshold {threshold} should be rejected"
            );
        }
    }
}
