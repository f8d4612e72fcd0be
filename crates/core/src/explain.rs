//! Plain-language explanation synthesis from classification outcomes.
//!
//! Each abnormal outcome maps to exactly one fixed narrative template, and
//! templates are concatenated in measurement order (haemoglobin, WBC,
//! platelets) regardless of clinical severity. The wording is deliberately
//! patient-facing: it describes what the result can mean and what to do next,
//! never a diagnosis.

use crate::classifier::{AnalysisReport, Status};
use crate::reference::Measurement;

pub const TEMPLATE_ANAEMIA: &str = "Your haemoglobin is below the reference range, which points \
     to anaemia. This can cause tiredness or light-headedness. A doctor can check whether iron \
     supplements are needed.";

pub const TEMPLATE_HIGH_HB: &str = "Your haemoglobin is above the reference range. This is often \
     caused by dehydration or smoking. Drinking more water is a sensible first step.";

pub const TEMPLATE_LEUKOPENIA: &str = "Your white blood cell count is below the reference range. \
     This can mean your immune defences are lowered, so take extra care around colds and \
     infections.";

pub const TEMPLATE_LEUKOCYTOSIS: &str = "Your white blood cell count is above the reference \
     range. This usually reflects an infection or inflammation somewhere in the body and should \
     be reviewed by a doctor.";

pub const TEMPLATE_THROMBOCYTOPENIA: &str = "Your platelet count is below the reference range. \
     Bleeding may take longer than usual to stop, so be careful with cuts and seek medical \
     advice.";

pub const TEMPLATE_THROMBOCYTOSIS: &str = "Your platelet count is above the reference range. \
     This can be the body's reaction to inflammation elsewhere.";

/// Returned alone when every measurement is normal; no disclaimer follows.
pub const TEMPLATE_ALL_NORMAL: &str =
    "All of your results are within the reference ranges. Nothing here needs follow-up.";

/// Appended after the templates whenever at least one abnormality exists.
pub const DISCLAIMER: &str =
    "(This is guidance, not a diagnosis. Please take these results to a doctor.)";

/// Separator between consecutive narrative templates.
const TEMPLATE_SEPARATOR: &str = " \n";

/// Synthesize the plain-language explanation for an analysis report.
///
/// Pure and total: any well-formed report produces a non-empty string.
pub fn explain(report: &AnalysisReport) -> String {
    let mut parts = Vec::new();
    for (measurement, result) in report.iter() {
        if let Some(template) = template_for(measurement, result.status) {
            parts.push(template);
        }
    }

    if parts.is_empty() {
        return TEMPLATE_ALL_NORMAL.to_string();
    }

    format!("{}\n\n{}", parts.join(TEMPLATE_SEPARATOR), DISCLAIMER)
}

fn template_for(measurement: Measurement, status: Status) -> Option<&'static str> {
    match (measurement, status) {
        (Measurement::Haemoglobin, Status::Low) => Some(TEMPLATE_ANAEMIA),
        (Measurement::Haemoglobin, Status::High) => Some(TEMPLATE_HIGH_HB),
        (Measurement::Wbc, Status::Low) => Some(TEMPLATE_LEUKOPENIA),
        (Measurement::Wbc, Status::High) => Some(TEMPLATE_LEUKOCYTOSIS),
        (Measurement::Platelets, Status::Low) => Some(TEMPLATE_THROMBOCYTOPENIA),
        (Measurement::Platelets, Status::High) => Some(TEMPLATE_THROMBOCYTOSIS),
        (_, Status::Normal) => None,
    }
}
