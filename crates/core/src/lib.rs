//! # LabWise Core
//!
//! Core analysis pipeline for the LabWise CBC awareness system.
//!
//! This crate contains the four pure pipeline stages and their glue:
//! - Classification of blood-test values against static reference ranges
//! - Deterministic context retrieval from the marker-delimited corpus
//! - Plain-language explanation synthesis from fixed templates
//! - Assembly of the final plain-text report
//!
//! **No presentation concerns**: forms, styling, page layout and file
//! download mechanics belong to the shell (`labwise-cli` or any other front
//! end). The shell supplies a demographic string and three numeric values and
//! displays whatever the pipeline returns; nothing in this crate raises an
//! error across its public boundary.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod explain;
pub mod reference;
pub mod report;
pub mod retriever;

pub use classifier::{classify, AnalysisReport, ClassificationResult, GroupResolution, Status};
pub use config::CoreConfig;
pub use corpus::CorpusDocument;
pub use error::{CorpusError, CorpusResult};
pub use reference::{reference_range, DemographicGroup, Measurement, MeasurementRange};
pub use report::{assemble, RawInputs};
pub use retriever::{retrieve, RetrievedContext};

use serde::Serialize;

/// Every artefact produced by one pipeline run, for structured display by
/// the shell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    /// Per-measurement classification outcomes.
    pub report: AnalysisReport,
    /// Plain-language narrative.
    pub explanation: String,
    /// Retrieved corpus context.
    pub context: RetrievedContext,
    /// The assembled plain-text report document.
    pub document: String,
}

/// Facade running the full pipeline in dependency order.
///
/// Holds the configuration resolved at startup; the corpus itself lives in
/// the process-wide cache and is shared by every service instance.
#[derive(Clone, Debug, Default)]
pub struct AnalysisService {
    config: CoreConfig,
}

impl AnalysisService {
    /// Create a new `AnalysisService` with the given configuration.
    pub fn new(config: CoreConfig) -> Self {
        Self { config }
    }

    /// Run classification, retrieval, explanation and report assembly for
    /// one set of inputs.
    pub fn analyse(&self, group: &str, hb: f64, wbc: f64, platelets: f64) -> Analysis {
        let report = classifier::classify(group, hb, wbc, platelets);
        let abnormal_keys = report.abnormal_keys();

        let corpus = corpus::global(&self.config);
        let context = retriever::retrieve(&abnormal_keys, corpus);
        let explanation = explain::explain(&report);

        let inputs = RawInputs { hb, wbc, platelets };
        let document = report::assemble(&report, &inputs, &explanation, &context);

        Analysis {
            report,
            explanation,
            context,
            document,
        }
    }
}
