//! Error types for the LabWise core crate.
//!
//! The analysis pipeline itself never fails across its public boundary: every
//! degraded condition (missing corpus, unrecognised demographic group, absent
//! section markers) resolves to a usable sentinel value. The errors defined
//! here are internal to the corpus store and are converted into the
//! placeholder document before they can reach a caller.

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("knowledge corpus not found (searched: {searched})")]
    NotFound { searched: String },
    #[error("failed to read knowledge corpus: {0}")]
    Read(std::io::Error),
}

pub type CorpusResult<T> = std::result::Result<T, CorpusError>;
