//! End-to-end pipeline test: JSON in, ranked JSON and report out.

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use ahp_prioritizer::adapters::{JsonComplaintSource, JsonResultSink};
use ahp_prioritizer::application::{PrioritizeComplaintsCommand, PrioritizeComplaintsHandler};
use ahp_prioritizer::config::AnalysisConfig;
use ahp_prioritizer::domain::ahp::{CriteriaSet, Judgments, Weights, ComparisonMatrix};
use ahp_prioritizer::domain::prioritization::{PriorityBand, RankedComplaints};
use ahp_prioritizer::ports::ComplaintSource;

const COMPLAINTS_JSON: &str = r#"[
    {
        "id": "C001",
        "title": "Gas leak near the primary school",
        "type": "gas_leak",
        "department": "Utilities",
        "severity": "critical",
        "complexity": "medium",
        "status": "pending",
        "affected_people": 300,
        "created_at": "2024-03-01T06:00:00Z",
        "estimated_cost": 5000.0,
        "department_load": 6
    },
    {
        "id": "C002",
        "title": "Broken traffic light at Main and 3rd",
        "type": "broken_traffic_light",
        "department": "Roads",
        "severity": "high",
        "complexity": "low",
        "status": "pending",
        "affected_people": 80,
        "created_at": "2024-02-28T10:00:00Z",
        "estimated_cost": 1200.0,
        "department_load": 12
    },
    {
        "id": "C003",
        "title": "Graffiti on the river underpass",
        "type": "graffiti",
        "department": "Sanitation",
        "severity": "low",
        "complexity": "low",
        "status": "pending",
        "affected_people": 5,
        "created_at": "2024-02-01T09:00:00Z",
        "estimated_cost": 300.0,
        "department_load": 2
    },
    {
        "id": "C004",
        "title": "Pothole cluster on Elm Street",
        "type": "pothole",
        "department": "Roads",
        "severity": "medium",
        "complexity": "medium",
        "status": "pending",
        "affected_people": 45,
        "created_at": "2024-02-25T14:00:00Z",
        "estimated_cost": 2500.0,
        "department_load": 12
    }
]"#;

#[test]
fn pipeline_ranks_exports_and_reports() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("complaints.json");
    let output = dir.path().join("out/prioritized.json");
    let report = dir.path().join("out/report.txt");
    fs::write(&input, COMPLAINTS_JSON).unwrap();

    let handler = PrioritizeComplaintsHandler::new(
        Box::new(JsonComplaintSource::new(&input)),
        Box::new(JsonResultSink::new(&output, &report)),
        AnalysisConfig::default(),
    );

    let result = handler
        .handle(PrioritizeComplaintsCommand {
            reference_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        })
        .unwrap();

    // The default judgment set is consistent, so no warning.
    assert!(result.consistency_warning.is_none());
    assert_eq!(result.total, 4);
    assert_eq!(result.band_counts.values().sum::<usize>(), 4);

    // The critical gas leak outranks the nuisance complaints.
    assert_eq!(result.top[0].id, "C001");
    let graffiti_rank = result.top.iter().find(|t| t.id == "C003").unwrap().rank;
    assert!(graffiti_rank > result.top[0].rank);

    // Exported results parse back and agree with the in-memory ranking.
    let exported: RankedComplaints =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(exported.len(), 4);
    assert_eq!(exported.results()[0].complaint.id, "C001");
    assert_eq!(exported.results()[0].priority_rank, 1);

    // Every result carries a band, and the bands partition the set.
    let bands = exported.categorize();
    let banded: usize = bands.values().map(Vec::len).sum();
    assert_eq!(banded, exported.len());
    assert_eq!(
        bands[&PriorityBand::Critical].len(),
        result.band_counts[&PriorityBand::Critical]
    );

    // The written report matches the returned one and carries the data.
    let written = fs::read_to_string(&report).unwrap();
    assert_eq!(written, result.report);
    assert!(written.contains("CRITERIA WEIGHTS"));
    assert!(written.contains("Public Safety Risk"));
    assert!(written.contains("Consistency Ratio"));
    assert!(written.contains("Total Complaints: 4"));
}

#[test]
fn loaded_complaints_rank_under_custom_weights() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("complaints.json");
    fs::write(&input, COMPLAINTS_JSON).unwrap();

    let mut complaints = JsonComplaintSource::new(&input).load().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    ahp_prioritizer::domain::scoring::enrich_all(&mut complaints, now);

    // Weigh urgency only lightly against safety.
    let criteria = CriteriaSet::new([
        "Public Safety Risk",
        "Scale of Impact",
        "Urgency Level",
        "Resource Requirements",
        "Department Capacity",
    ])
    .unwrap();
    let judgments = Judgments::from_triples([
        ("Public Safety Risk", "Scale of Impact", 5.0),
        ("Public Safety Risk", "Urgency Level", 5.0),
        ("Public Safety Risk", "Resource Requirements", 7.0),
        ("Public Safety Risk", "Department Capacity", 7.0),
    ])
    .unwrap();
    let matrix = ComparisonMatrix::build(criteria, &judgments).unwrap();
    let weights = Weights::derive(&matrix);

    let ranked = RankedComplaints::rank(&weights, complaints).unwrap();

    assert_eq!(ranked.results()[0].complaint.id, "C001");
    assert_eq!(ranked.results()[0].priority_band, PriorityBand::Critical);

    let roads = ranked.by_department("Roads");
    assert_eq!(roads.len(), 2);
    assert!(roads[0].priority_score >= roads[1].priority_score);
}
