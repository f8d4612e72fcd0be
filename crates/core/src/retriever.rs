//! Deterministic keyword retrieval over the marker-delimited corpus.
//!
//! This is not semantic search: each measurement category has a fixed
//! keyword trigger set, and a fired trigger extracts the substring between
//! that category's section marker and the next marker in corpus order. The
//! corpus section order (haemoglobin, WBC, platelets, general advice) is part
//! of the corpus format contract.

use crate::constants::{
    MARKER_GENERAL_ADVICE, MARKER_HAEMOGLOBIN, MARKER_PLATELETS, MARKER_WBC,
};
use crate::corpus::CorpusDocument;
use serde::Serialize;

/// Keywords that trigger haemoglobin section retrieval.
const HAEMOGLOBIN_TRIGGERS: [&str; 3] = ["hb", "hemoglobin", "anemia"];

/// Keywords that trigger white blood cell section retrieval.
const WHITE_CELL_TRIGGERS: [&str; 3] = ["wbc", "leukocytes", "infection"];

/// Keywords that trigger platelet section retrieval.
const PLATELET_TRIGGERS: [&str; 2] = ["platelets", "thrombocytes"];

/// Sentinel text when nothing was abnormal in the first place.
pub const NO_ABNORMALITIES_TEXT: &str =
    "Values are within normal ranges. General health advice applies.";

/// Sentinel text when abnormal keys fired no corpus section.
pub const NO_MATCHING_CONTEXT_TEXT: &str = "No specific context found for the abnormalities.";

/// Outcome of a retrieval run.
///
/// "Nothing abnormal" and "abnormal but no matching corpus section" are
/// distinct states; keeping them as separate variants lets the assembler and
/// the shell present accurate messaging instead of one conflated sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RetrievedContext {
    /// The abnormal key set was empty; there was nothing to look up.
    NoAbnormalities,
    /// Keys were supplied but no section marker matched in the corpus.
    NoMatchingContext,
    /// Extracted sections, in category trigger order (hb, wbc, platelets).
    Context(Vec<String>),
}

impl RetrievedContext {
    /// Render the context as display text, substituting the sentinel
    /// messages for the empty variants.
    pub fn as_text(&self) -> String {
        match self {
            RetrievedContext::NoAbnormalities => NO_ABNORMALITIES_TEXT.to_string(),
            RetrievedContext::NoMatchingContext => NO_MATCHING_CONTEXT_TEXT.to_string(),
            RetrievedContext::Context(sections) => sections.join("\n\n"),
        }
    }
}

/// Extract the corpus sections matching a set of abnormal measurement keys.
///
/// Matching is case-sensitive against the fixed trigger keyword sets. A
/// category whose start marker is absent from the corpus silently contributes
/// nothing; a missing end marker extends the section to the end of the
/// document.
pub fn retrieve(abnormal_keys: &[&str], corpus: &CorpusDocument) -> RetrievedContext {
    if abnormal_keys.is_empty() {
        return RetrievedContext::NoAbnormalities;
    }

    let categories: [(&[&str], &str, &str); 3] = [
        (&HAEMOGLOBIN_TRIGGERS, MARKER_HAEMOGLOBIN, MARKER_WBC),
        (&WHITE_CELL_TRIGGERS, MARKER_WBC, MARKER_PLATELETS),
        (&PLATELET_TRIGGERS, MARKER_PLATELETS, MARKER_GENERAL_ADVICE),
    ];

    let mut sections = Vec::new();
    for (triggers, start_marker, end_marker) in categories {
        if !abnormal_keys.iter().any(|key| triggers.contains(key)) {
            continue;
        }
        if let Some(section) = extract_section(corpus.text(), start_marker, end_marker) {
            sections.push(section);
        }
    }

    if sections.is_empty() {
        RetrievedContext::NoMatchingContext
    } else {
        RetrievedContext::Context(sections)
    }
}

/// The trimmed substring from `start_marker` up to (not including)
/// `end_marker`, or to the end of the text when the end marker is absent.
/// The start marker itself is kept as the section heading.
fn extract_section(text: &str, start_marker: &str, end_marker: &str) -> Option<String> {
    let start = text.find(start_marker)?;
    let tail = &text[start..];
    let end = tail[start_marker.len()..]
        .find(end_marker)
        .map(|offset| start_marker.len() + offset)
        .unwrap_or(tail.len());
    Some(tail[..end].trim().to_string())
}
