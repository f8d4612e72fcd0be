//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! analysis service. The only configurable item is the knowledge corpus
//! location; resolution is deterministic so the same deployment always reads
//! the same file.

use crate::constants::DEFAULT_CORPUS_RELATIVE_PATH;
use crate::error::{CorpusError, CorpusResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    corpus_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with an optional explicit corpus path.
    pub fn new(corpus_path: Option<PathBuf>) -> Self {
        Self { corpus_path }
    }

    pub fn corpus_path(&self) -> Option<&Path> {
        self.corpus_path.as_deref()
    }
}

/// Resolve the knowledge corpus file.
///
/// The process working directory is not guaranteed to match the corpus's
/// installed location, so several candidates are tried in a fixed order:
///
/// 1. the explicit override, if one is configured (it must exist);
/// 2. `data/medical_context.txt` under each ancestor of `CARGO_MANIFEST_DIR`;
/// 3. `data/medical_context.txt` relative to the process working directory.
///
/// # Errors
///
/// Returns `CorpusError::NotFound` when no candidate is a readable file. The
/// corpus store converts this into the placeholder document rather than
/// surfacing it.
pub fn resolve_corpus_path(override_path: Option<&Path>) -> CorpusResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(CorpusError::NotFound {
            searched: path.display().to_string(),
        });
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_CORPUS_RELATIVE_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    let cwd_relative = PathBuf::from(DEFAULT_CORPUS_RELATIVE_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    Err(CorpusError::NotFound {
        searched: format!(
            "{} under {} ancestors and the working directory",
            DEFAULT_CORPUS_RELATIVE_PATH,
            manifest_dir.display()
        ),
    })
}
