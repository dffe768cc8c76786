//! Error types for the counting engine

use thiserror::Error;

/// Errors a counting run can surface. All-or-nothing: no variant carries a
/// partial result.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected before any chunk is created: zero chunk count or blank input.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The worker pool could not complete the run (panic, disconnect).
    #[error("processing failed: {reason}")]
    ProcessingFailure { reason: String },

    /// Raised by the file collaborators (input read, report write) and
    /// propagated through the pipeline unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn processing_failure(reason: impl Into<String>) -> Self {
        Self::ProcessingFailure {
            reason: reason.into(),
        }
    }
}
