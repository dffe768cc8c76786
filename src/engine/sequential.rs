//! Sequential execution strategy

use std::time::Instant;

use super::counter::{count_chunk, merge_into};
use super::error::EngineError;
use super::partition::split_text;
use super::types::{ProcessingResult, WordCountMap};

/// Count words in a single pass on the calling thread.
///
/// Chunks are processed in order and each per-chunk map is merged into the
/// running total immediately. Elapsed time covers partitioning, counting,
/// and merging only.
pub fn run_sequential(text: &str, chunk_count: usize) -> Result<ProcessingResult, EngineError> {
    super::validate_input(text, chunk_count)?;

    let start = Instant::now();
    let chunks = split_text(text, chunk_count);
    let chunks_processed = chunks.len();

    let mut totals = WordCountMap::new();
    for chunk in &chunks {
        merge_into(&mut totals, count_chunk(chunk));
    }
    let elapsed = start.elapsed();

    tracing::debug!(
        chunks = chunks_processed,
        distinct = totals.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "sequential run complete"
    );
    Ok(ProcessingResult::new(totals, elapsed, chunks_processed, 1))
}
