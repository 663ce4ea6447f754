//! Input/output path configuration

use serde::Deserialize;

use super::error::ValidationError;

/// File locations for one pipeline run
#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    /// JSON file with the complaint records to prioritize
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// JSON file the ranked results are exported to
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Text file the summary report is written to
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

impl IoConfig {
    /// Validate I/O configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_path.trim().is_empty() {
            return Err(ValidationError::EmptyInputPath);
        }
        if self.output_path.trim().is_empty() {
            return Err(ValidationError::EmptyOutputPath);
        }
        if self.report_path.trim().is_empty() {
            return Err(ValidationError::EmptyReportPath);
        }
        Ok(())
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            report_path: default_report_path(),
        }
    }
}

fn default_input_path() -> String {
    "data/complaints.json".to_string()
}

fn default_output_path() -> String {
    "data/prioritized_results.json".to_string()
}

fn default_report_path() -> String {
    "reports/summary_report.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = IoConfig::default();
        assert_eq!(config.input_path, "data/complaints.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_paths_are_rejected() {
        let config = IoConfig {
            input_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyInputPath)
        ));
    }
}
