//! Shared data shapes for the counting engine

use std::collections::HashMap;

use serde::Serialize;

/// Mapping from word (case-sensitive, whitespace-delimited token) to its
/// occurrence count. No normalization: `"Word,"` and `"word"` are distinct.
pub type WordCountMap = HashMap<String, u64>;

/// A contiguous piece of the input text handed to one counting pass.
///
/// The sequence index is 1-based and exists for traceability (logging) only;
/// correctness never depends on it.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            text: text.to_string(),
        }
    }
}

/// Statistics from a counting run
#[derive(Debug, Default, Clone, Serialize)]
pub struct CountStats {
    pub chunks_processed: usize,
    pub workers_used: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub duration_ms: u64,
}

/// Result of a counting run: the merged map plus wall-clock timing measured
/// around the processing call only (input collection and rendering excluded).
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub counts: WordCountMap,
    pub elapsed_seconds: f64,
    pub stats: CountStats,
}

impl ProcessingResult {
    pub(crate) fn new(
        counts: WordCountMap,
        elapsed: std::time::Duration,
        chunks: usize,
        workers: usize,
    ) -> Self {
        let total_words = counts.values().sum();
        let stats = CountStats {
            chunks_processed: chunks,
            workers_used: workers,
            distinct_words: counts.len(),
            total_words,
            duration_ms: elapsed.as_millis() as u64,
        };
        Self {
            counts,
            elapsed_seconds: elapsed.as_secs_f64(),
            stats,
        }
    }
}
