//! Constants used throughout the LabWise core crate.
//!
//! This module contains the corpus location and section marker constants to
//! ensure consistency between the corpus store, the retriever and their tests.

/// Default location of the knowledge corpus, relative to the workspace root
/// (or the process working directory as a fallback).
pub const DEFAULT_CORPUS_RELATIVE_PATH: &str = "data/medical_context.txt";

/// Section marker opening the haemoglobin background text.
pub const MARKER_HAEMOGLOBIN: &str = "[HEMOGLOBIN]";

/// Section marker opening the white blood cell background text.
pub const MARKER_WBC: &str = "[WBC - White Blood Cells]";

/// Section marker opening the platelet background text.
pub const MARKER_PLATELETS: &str = "[PLATELETS]";

/// Section marker opening the general advice text. Never retrieved on its
/// own; it terminates the platelet section.
pub const MARKER_GENERAL_ADVICE: &str = "[GENERAL ADVICE]";
