//! Word-counting engine
//!
//! Two interchangeable execution strategies over the same partition/count/
//! merge pipeline:
//!
//! - **Sequential**: one synchronous pass over the chunks on the calling
//!   thread, merging as it goes.
//! - **Parallel**: all chunks dispatched to a fixed-size worker pool sized
//!   to the host's available parallelism; the caller blocks until every
//!   worker has returned, then merges on the coordinating thread.
//!
//! The merge is commutative and associative, so both strategies produce
//! identical maps for the same input; only elapsed time differs. Runs are
//! all-or-nothing: a failed run surfaces an [`EngineError`] and never a
//! partial result.

pub mod counter;
pub mod error;
pub mod parallel;
pub mod partition;
pub mod sequential;
pub mod types;

pub use error::EngineError;
pub use parallel::run_parallel;
pub use sequential::run_sequential;
pub use types::{Chunk, CountStats, ProcessingResult, WordCountMap};

/// Reject invalid runs before any chunk is created.
pub(crate) fn validate_input(text: &str, chunk_count: usize) -> Result<(), EngineError> {
    if chunk_count == 0 {
        return Err(EngineError::invalid_configuration(
            "chunk count must be a positive integer",
        ));
    }
    if text.trim().is_empty() {
        return Err(EngineError::invalid_configuration(
            "input text is empty; nothing to count",
        ));
    }
    Ok(())
}
