//! Pipeline entry point: load complaints, derive default AHP weights,
//! rank the batch, export the results, and print the summary report.

use chrono::Utc;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ahp_prioritizer::adapters::{JsonComplaintSource, JsonResultSink};
use ahp_prioritizer::application::{PrioritizeComplaintsCommand, PrioritizeComplaintsHandler};
use ahp_prioritizer::config::AppConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let source = JsonComplaintSource::new(&config.io.input_path);
    let sink = JsonResultSink::new(&config.io.output_path, &config.io.report_path);
    let handler =
        PrioritizeComplaintsHandler::new(Box::new(source), Box::new(sink), config.analysis.clone());

    let result = handler.handle(PrioritizeComplaintsCommand {
        reference_time: Utc::now(),
    })?;

    if let Some(warning) = &result.consistency_warning {
        eprintln!("warning: {warning}");
    }

    println!("Top {} priority complaints:", result.top.len());
    for entry in &result.top {
        println!(
            "#{:2} | Score: {:.4} | [{}] {} ({})",
            entry.rank, entry.score, entry.id, entry.title, entry.department
        );
    }
    println!();
    println!("{}", result.report);

    Ok(())
}
