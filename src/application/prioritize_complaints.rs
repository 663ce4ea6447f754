//! PrioritizeComplaintsHandler - the end-to-end analysis use case.
//!
//! Loads complaints through the source port, enriches their criteria
//! scores, derives default AHP weights, ranks the batch, and hands the
//! results and summary report to the sink port.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::domain::ahp::AhpError;
use crate::domain::prioritization::{
    default_criteria, default_judgments, ComplaintPrioritizer, ConsistencyWarning, PriorityBand,
    PrioritizeError,
};
use crate::domain::scoring;
use crate::ports::{ComplaintSource, ExportError, ResultSink, SourceError};

/// Command to run one prioritization analysis.
#[derive(Debug, Clone)]
pub struct PrioritizeComplaintsCommand {
    /// Reference time for age-based urgency scoring.
    pub reference_time: DateTime<Utc>,
}

/// One entry of the top-N listing.
#[derive(Debug, Clone, Serialize)]
pub struct TopComplaint {
    pub rank: u32,
    pub id: String,
    pub title: String,
    pub department: String,
    pub score: f64,
}

/// Result of a successful analysis run.
#[derive(Debug, Clone)]
pub struct PrioritizeComplaintsResult {
    /// Number of complaints processed.
    pub total: usize,
    /// Consistency warning, if the judgments failed the check.
    pub consistency_warning: Option<ConsistencyWarning>,
    /// Result count per priority band.
    pub band_counts: BTreeMap<PriorityBand, usize>,
    /// The top complaints, up to the configured count.
    pub top: Vec<TopComplaint>,
    /// The formatted summary report, as written to the sink.
    pub report: String,
}

/// Error type for the analysis use case.
#[derive(Debug, Error)]
pub enum PrioritizeComplaintsError {
    #[error(transparent)]
    Ahp(#[from] AhpError),

    #[error(transparent)]
    Prioritize(#[from] PrioritizeError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler running the full load -> enrich -> weigh -> rank -> export
/// pipeline.
pub struct PrioritizeComplaintsHandler {
    source: Box<dyn ComplaintSource>,
    sink: Box<dyn ResultSink>,
    config: AnalysisConfig,
}

impl PrioritizeComplaintsHandler {
    pub fn new(
        source: Box<dyn ComplaintSource>,
        sink: Box<dyn ResultSink>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    pub fn handle(
        &self,
        command: PrioritizeComplaintsCommand,
    ) -> Result<PrioritizeComplaintsResult, PrioritizeComplaintsError> {
        let mut engine = ComplaintPrioritizer::with_threshold(self.config.consistency_threshold);
        let consistency_warning = if self.config.strict_judgments {
            engine.derive_weights_strict(default_criteria(), default_judgments())?
        } else {
            engine.use_default_weights()?
        };

        let mut complaints = self.source.load()?;
        info!(count = complaints.len(), "enriching criteria scores");
        scoring::enrich_all(&mut complaints, command.reference_time);

        engine.prioritize(complaints)?;
        let results = engine.results()?;
        let total = results.len();
        let band_counts = results.band_counts();

        let top = results
            .top_n(self.config.top_n)
            .iter()
            .map(|r| TopComplaint {
                rank: r.priority_rank,
                id: r.complaint.id.clone(),
                title: r.complaint.title.clone(),
                department: r.complaint.department.clone(),
                score: r.priority_score,
            })
            .collect();

        self.sink.export_results(results)?;
        let report = engine.summary_report()?;
        self.sink.write_report(&report)?;

        Ok(PrioritizeComplaintsResult {
            total,
            consistency_warning,
            band_counts,
            top,
            report,
        })
    }
}
