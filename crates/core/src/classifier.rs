//! Classification of CBC values against the static reference ranges.
//!
//! The classifier is a pure, total function over its numeric inputs: no value
//! magnitude raises an error, and identical inputs always produce a
//! structurally identical report. Range validation, if any, is the caller's
//! concern.

use crate::reference::{reference_range, DemographicGroup, Measurement};
use serde::Serialize;

/// Where a measurement sits relative to its reference range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    Low,
    Normal,
    High,
}

/// Outcome of classifying a single measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub status: Status,
    /// Fixed clinical label for this outcome (for example "Anemia").
    pub label: &'static str,
}

/// How a caller-supplied demographic string resolved against the known groups.
///
/// An unrecognised group falls back to male reference ranges, which is an
/// unsafe default to apply silently. The original input is therefore carried
/// in `UsedDefault` so that callers can detect the fallback and surface it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GroupResolution {
    Resolved(DemographicGroup),
    UsedDefault { original: String },
}

impl GroupResolution {
    /// Case-normalise an input string and match it against the known groups.
    pub fn resolve(input: &str) -> Self {
        match capitalise(input).as_str() {
            "Male" => GroupResolution::Resolved(DemographicGroup::Male),
            "Female" => GroupResolution::Resolved(DemographicGroup::Female),
            _ => {
                tracing::warn!(
                    "unrecognised demographic group {:?}, applying male reference ranges",
                    input
                );
                GroupResolution::UsedDefault {
                    original: input.to_string(),
                }
            }
        }
    }

    /// The group whose reference ranges apply.
    pub fn group(&self) -> DemographicGroup {
        match self {
            GroupResolution::Resolved(group) => *group,
            GroupResolution::UsedDefault { .. } => DemographicGroup::Male,
        }
    }

    /// Whether the default group was applied instead of a recognised input.
    pub fn used_default(&self) -> bool {
        matches!(self, GroupResolution::UsedDefault { .. })
    }
}

/// Per-measurement classification outcomes for one analysis run.
///
/// Results are held in the fixed measurement order (haemoglobin, WBC,
/// platelets) used by every downstream stage. The report is built in a single
/// classification call and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub group: GroupResolution,
    pub hb: ClassificationResult,
    pub wbc: ClassificationResult,
    pub platelets: ClassificationResult,
}

impl AnalysisReport {
    /// The result for a single measurement.
    pub fn result(&self, measurement: Measurement) -> &ClassificationResult {
        match measurement {
            Measurement::Haemoglobin => &self.hb,
            Measurement::Wbc => &self.wbc,
            Measurement::Platelets => &self.platelets,
        }
    }

    /// Results in fixed measurement order.
    pub fn iter(&self) -> impl Iterator<Item = (Measurement, &ClassificationResult)> {
        Measurement::IN_REPORT_ORDER
            .into_iter()
            .map(move |m| (m, self.result(m)))
    }

    /// Keys of the measurements whose status is not `Normal`, in measurement
    /// order. These drive context retrieval.
    pub fn abnormal_keys(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, result)| result.status != Status::Normal)
            .map(|(measurement, _)| measurement.key())
            .collect()
    }
}

/// Classify three CBC values against the reference ranges for the resolved
/// demographic group.
pub fn classify(group: &str, hb: f64, wbc: f64, platelets: f64) -> AnalysisReport {
    let resolution = GroupResolution::resolve(group);
    let resolved = resolution.group();

    AnalysisReport {
        hb: classify_one(resolved, Measurement::Haemoglobin, hb),
        wbc: classify_one(resolved, Measurement::Wbc, wbc),
        platelets: classify_one(resolved, Measurement::Platelets, platelets),
        group: resolution,
    }
}

fn classify_one(
    group: DemographicGroup,
    measurement: Measurement,
    value: f64,
) -> ClassificationResult {
    let range = reference_range(group, measurement);
    if value < range.lower {
        ClassificationResult {
            status: Status::Low,
            label: low_label(measurement),
        }
    } else if value > range.upper {
        ClassificationResult {
            status: Status::High,
            label: high_label(measurement),
        }
    } else {
        ClassificationResult {
            status: Status::Normal,
            label: "Normal",
        }
    }
}

fn low_label(measurement: Measurement) -> &'static str {
    match measurement {
        Measurement::Haemoglobin => "Anemia",
        Measurement::Wbc => "Leukopenia",
        Measurement::Platelets => "Thrombocytopenia",
    }
}

fn high_label(measurement: Measurement) -> &'static str {
    match measurement {
        Measurement::Haemoglobin => "High Hb",
        Measurement::Wbc => "Leukocytosis (Infection check)",
        Measurement::Platelets => "Thrombocytosis",
    }
}

/// First letter upper-cased, remainder lower-cased, surrounding whitespace
/// removed.
fn capitalise(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_inside_range_classify_normal() {
        let report = classify("male", 15.0, 6000.0, 250_000.0);
        for (_, result) in report.iter() {
            assert_eq!(result.status, Status::Normal);
            assert_eq!(result.label, "Normal");
        }
        assert_eq!(
            report.group,
            GroupResolution::Resolved(DemographicGroup::Male)
        );
        assert!(report.abnormal_keys().is_empty());
    }

    #[test]
    fn low_values_get_fixed_labels() {
        let report = classify("female", 10.0, 3000.0, 100_000.0);
        assert_eq!(report.hb.status, Status::Low);
        assert_eq!(report.hb.label, "Anemia");
        assert_eq!(report.wbc.status, Status::Low);
        assert_eq!(report.wbc.label, "Leukopenia");
        assert_eq!(report.platelets.status, Status::Low);
        assert_eq!(report.platelets.label, "Thrombocytopenia");
        assert_eq!(report.abnormal_keys(), vec!["hb", "wbc", "platelets"]);
    }

    #[test]
    fn high_values_get_fixed_labels() {
        let report = classify("male", 19.0, 15_000.0, 600_000.0);
        assert_eq!(report.hb.label, "High Hb");
        assert_eq!(report.wbc.label, "Leukocytosis (Infection check)");
        assert_eq!(report.platelets.label, "Thrombocytosis");
        for (_, result) in report.iter() {
            assert_eq!(result.status, Status::High);
        }
    }

    #[test]
    fn boundary_values_classify_normal() {
        // Ranges are inclusive at both ends.
        let report = classify("male", 13.5, 11_000.0, 450_000.0);
        for (_, result) in report.iter() {
            assert_eq!(result.status, Status::Normal);
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify("female", 11.9, 4500.0, 460_000.0);
        let second = classify("female", 11.9, 4500.0, 460_000.0);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognised_group_defaults_to_male_ranges() {
        // 13.0 is low for male ranges but normal for female ranges, so it
        // proves which table was applied.
        let report = classify("Other", 13.0, 6000.0, 250_000.0);
        assert_eq!(
            report.group,
            GroupResolution::UsedDefault {
                original: "Other".to_string()
            }
        );
        assert!(report.group.used_default());
        assert_eq!(report.group.group(), DemographicGroup::Male);
        assert_eq!(report.hb.status, Status::Low);
        assert_eq!(report.hb.label, "Anemia");
    }

    #[test]
    fn group_matching_is_case_insensitive() {
        let report = classify("fEMALE", 13.0, 6000.0, 250_000.0);
        assert_eq!(
            report.group,
            GroupResolution::Resolved(DemographicGroup::Female)
        );
        assert_eq!(report.hb.status, Status::Normal);
    }

    #[test]
    fn zero_values_classify_without_panicking() {
        let report = classify("male", 0.0, 0.0, 0.0);
        for (_, result) in report.iter() {
            assert_eq!(result.status, Status::Low);
        }
    }
}
