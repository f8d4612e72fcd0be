//! Knowledge corpus loading and caching.
//!
//! The corpus is a single UTF-8 text blob, loaded once and then treated as
//! process-wide read-only state. A missing or unreadable corpus never fails
//! the pipeline: the store substitutes a placeholder document whose text
//! contains no section markers, so downstream retrieval simply finds nothing
//! and falls through to its own sentinel.

use crate::config::{resolve_corpus_path, CoreConfig};
use crate::error::CorpusResult;
use std::sync::OnceLock;

/// An immutable text blob holding the marker-delimited background sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusDocument {
    text: String,
    placeholder: bool,
}

impl CorpusDocument {
    /// Wrap loaded corpus text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: false,
        }
    }

    /// The sentinel document substituted when no corpus could be read.
    pub fn placeholder(reason: &str) -> Self {
        Self {
            text: format!("Knowledge corpus unavailable: {reason}"),
            placeholder: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this document is the sentinel rather than real corpus text.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Load the corpus for the given configuration.
///
/// This never fails: any resolution or read error degrades to the placeholder
/// document, with a warning logged for the operator.
pub fn load(config: &CoreConfig) -> CorpusDocument {
    match try_load(config) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!("falling back to placeholder corpus: {}", err);
            CorpusDocument::placeholder(&err.to_string())
        }
    }
}

fn try_load(config: &CoreConfig) -> CorpusResult<CorpusDocument> {
    let path = resolve_corpus_path(config.corpus_path())?;
    let text = std::fs::read_to_string(&path).map_err(crate::error::CorpusError::Read)?;
    Ok(CorpusDocument::new(text))
}

static CORPUS: OnceLock<CorpusDocument> = OnceLock::new();

/// The process-wide corpus, loaded on first use and never reloaded.
///
/// The configuration passed to the first call decides what gets cached;
/// later calls return the same document regardless of their argument. There
/// is no reload or invalidation.
pub fn global(config: &CoreConfig) -> &'static CorpusDocument {
    CORPUS.get_or_init(|| load(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn loads_an_explicit_corpus_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "[HEMOGLOBIN]\nIron matters.\n").expect("write corpus");

        let document = load(&CoreConfig::new(Some(path)));
        assert!(!document.is_placeholder());
        assert!(document.text().contains("Iron matters."));
    }

    #[test]
    fn missing_corpus_degrades_to_placeholder() {
        let config = CoreConfig::new(Some(PathBuf::from("/nonexistent/corpus.txt")));
        let document = load(&config);
        assert!(document.is_placeholder());
        assert!(document.text().starts_with("Knowledge corpus unavailable"));
    }

    #[test]
    fn placeholder_contains_no_section_markers() {
        let document = CorpusDocument::placeholder("file not found");
        assert!(!document.text().contains(crate::constants::MARKER_HAEMOGLOBIN));
        assert!(!document.text().contains(crate::constants::MARKER_WBC));
    }
}
