//! End-to-end pipeline test against the shipped knowledge corpus.

use labwise_core::explain::{DISCLAIMER, TEMPLATE_ANAEMIA};
use labwise_core::{AnalysisService, CoreConfig, RetrievedContext, Status};

#[test]
fn anaemia_scenario_runs_through_every_stage() {
    let service = AnalysisService::new(CoreConfig::default());
    let analysis = service.analyse("male", 10.0, 6000.0, 250_000.0);

    // Classification: low haemoglobin only.
    assert_eq!(analysis.report.hb.status, Status::Low);
    assert_eq!(analysis.report.hb.label, "Anemia");
    assert_eq!(analysis.report.wbc.status, Status::Normal);
    assert_eq!(analysis.report.platelets.status, Status::Normal);
    assert_eq!(analysis.report.abnormal_keys(), vec!["hb"]);

    // Explanation: anaemia template first, disclaimer last.
    assert!(analysis.explanation.starts_with(TEMPLATE_ANAEMIA));
    assert!(analysis.explanation.ends_with(DISCLAIMER));

    // Retrieval: the shipped corpus carries a haemoglobin section.
    match &analysis.context {
        RetrievedContext::Context(sections) => {
            assert_eq!(sections.len(), 1);
            assert!(sections[0].starts_with("[HEMOGLOBIN]"));
        }
        other => panic!("expected Context, got {other:?}"),
    }

    // Report: labels and raw values present in the plain-text document.
    assert!(analysis.document.contains("Anemia"));
    assert!(analysis.document.contains("10.0"));
    assert!(analysis.document.contains("250000"));
}

#[test]
fn analysis_serialises_for_structured_display() {
    let service = AnalysisService::new(CoreConfig::default());
    let analysis = service.analyse("female", 13.0, 6000.0, 250_000.0);

    let json = serde_json::to_string(&analysis).expect("serialise analysis");
    assert!(json.contains("\"Normal\""));
    assert!(json.contains("\"Female\""));
}

#[test]
fn identical_inputs_produce_identical_analyses() {
    let service = AnalysisService::new(CoreConfig::default());
    let first = service.analyse("male", 10.0, 6000.0, 250_000.0);
    let second = service.analyse("male", 10.0, 6000.0, 250_000.0);
    assert_eq!(first, second);
}
