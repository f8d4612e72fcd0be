//! Plain-text report assembly.
//!
//! The assembler composes the patient inputs, the per-measurement
//! classification lines, the explanation and the retrieved context into a
//! single deterministic text block. The output carries no markup and no
//! timestamps, so identical inputs always produce byte-identical reports and
//! the shell can display or export the text directly.

use crate::classifier::AnalysisReport;
use crate::reference::Measurement;
use crate::retriever::RetrievedContext;
use serde::Serialize;

/// Echo of the raw values supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RawInputs {
    pub hb: f64,
    pub wbc: f64,
    pub platelets: f64,
}

impl RawInputs {
    fn value(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::Haemoglobin => self.hb,
            Measurement::Wbc => self.wbc,
            Measurement::Platelets => self.platelets,
        }
    }
}

const REPORT_TITLE: &str = "LABWISE CBC ANALYSIS REPORT";
const RULE: &str = "==============================";

/// Compose the final report document.
///
/// Sections, each under its own heading: input echo, classification lines in
/// measurement order, explanation, retrieved context. When the demographic
/// fallback was applied, the input echo says so explicitly rather than
/// presenting the default as the caller's input.
pub fn assemble(
    report: &AnalysisReport,
    inputs: &RawInputs,
    explanation: &str,
    context: &RetrievedContext,
) -> String {
    let mut output = String::new();

    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(" {}\n", REPORT_TITLE));
    output.push_str(RULE);
    output.push_str("\n\n");

    output.push_str("-- Patient Inputs --\n");
    if report.group.used_default() {
        output.push_str(&format!(
            "Group: {} (unrecognised input, male reference ranges applied)\n",
            report.group.group().as_str()
        ));
    } else {
        output.push_str(&format!("Group: {}\n", report.group.group().as_str()));
    }
    for measurement in Measurement::IN_REPORT_ORDER {
        output.push_str(&format!(
            "{}: {} {}\n",
            measurement.display_name(),
            format_value(measurement, inputs.value(measurement)),
            measurement.unit()
        ));
    }
    output.push('\n');

    output.push_str("-- Classification --\n");
    for (measurement, result) in report.iter() {
        output.push_str(&format!(
            "{}: {:?} ({})\n",
            measurement.display_name(),
            result.status,
            result.label
        ));
    }
    output.push('\n');

    output.push_str("-- Explanation --\n");
    output.push_str(explanation.trim_end());
    output.push_str("\n\n");

    output.push_str("-- Medical Context --\n");
    output.push_str(context.as_text().trim_end());
    output.push('\n');

    output
}

/// Haemoglobin is reported to one decimal place; the cell counts are whole
/// numbers.
fn format_value(measurement: Measurement, value: f64) -> String {
    match measurement {
        Measurement::Haemoglobin => format!("{value:.1}"),
        Measurement::Wbc | Measurement::Platelets => format!("{value:.0}"),
    }
}
