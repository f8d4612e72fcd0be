//! Static reference ranges for CBC measurements.
//!
//! The reference table is immutable data resolved entirely at compile time,
//! so it is safe to share across any number of concurrent classification
//! requests without synchronisation. Values are simplified WHO/standard
//! ranges; only the haemoglobin range differs between demographic groups.

use serde::Serialize;

/// A CBC measurement handled by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Measurement {
    Haemoglobin,
    Wbc,
    Platelets,
}

impl Measurement {
    /// Fixed evaluation and display order used by every pipeline stage.
    pub const IN_REPORT_ORDER: [Measurement; 3] =
        [Measurement::Haemoglobin, Measurement::Wbc, Measurement::Platelets];

    /// Short identifier used as the abnormal key for retrieval.
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Haemoglobin => "hb",
            Measurement::Wbc => "wbc",
            Measurement::Platelets => "platelets",
        }
    }

    /// Human-readable name for report output.
    pub fn display_name(self) -> &'static str {
        match self {
            Measurement::Haemoglobin => "Hemoglobin",
            Measurement::Wbc => "WBC",
            Measurement::Platelets => "Platelets",
        }
    }

    /// Unit the raw value is expressed in.
    pub fn unit(self) -> &'static str {
        match self {
            Measurement::Haemoglobin => "g/dL",
            Measurement::Wbc => "cells/mcL",
            Measurement::Platelets => "/mcL",
        }
    }
}

/// A demographic group with its own reference ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DemographicGroup {
    Male,
    Female,
}

impl DemographicGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            DemographicGroup::Male => "Male",
            DemographicGroup::Female => "Female",
        }
    }
}

/// Inclusive lower and upper bounds defining "Normal" for one measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeasurementRange {
    pub lower: f64,
    pub upper: f64,
}

impl MeasurementRange {
    /// Whether a value sits inside the range. Bounds are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Look up the reference range for a demographic group and measurement.
pub fn reference_range(group: DemographicGroup, measurement: Measurement) -> MeasurementRange {
    match (group, measurement) {
        (DemographicGroup::Male, Measurement::Haemoglobin) => MeasurementRange {
            lower: 13.5,
            upper: 17.5,
        },
        (DemographicGroup::Female, Measurement::Haemoglobin) => MeasurementRange {
            lower: 12.0,
            upper: 15.5,
        },
        (_, Measurement::Wbc) => MeasurementRange {
            lower: 4500.0,
            upper: 11000.0,
        },
        (_, Measurement::Platelets) => MeasurementRange {
            lower: 150_000.0,
            upper: 450_000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_range_has_lower_below_upper() {
        for group in [DemographicGroup::Male, DemographicGroup::Female] {
            for measurement in Measurement::IN_REPORT_ORDER {
                let range = reference_range(group, measurement);
                assert!(
                    range.lower < range.upper,
                    "invalid range for {:?}/{:?}",
                    group,
                    measurement
                );
            }
        }
    }

    #[test]
    fn haemoglobin_ranges_differ_by_group() {
        let male = reference_range(DemographicGroup::Male, Measurement::Haemoglobin);
        let female = reference_range(DemographicGroup::Female, Measurement::Haemoglobin);
        assert_ne!(male, female);
        assert_eq!(male.lower, 13.5);
        assert_eq!(female.upper, 15.5);
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = reference_range(DemographicGroup::Male, Measurement::Wbc);
        assert!(range.contains(4500.0));
        assert!(range.contains(11000.0));
        assert!(!range.contains(11000.1));
    }
}
