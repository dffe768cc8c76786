//! Per-chunk word counting and map merging

use super::types::{Chunk, WordCountMap};

/// Count exact-string word occurrences in one chunk.
///
/// Tokens are runs of non-whitespace characters; there is no case folding
/// and no punctuation stripping, so `"Word,"` and `"word"` are distinct
/// keys. The chunk index is carried for diagnostics only.
pub fn count_chunk(chunk: &Chunk) -> WordCountMap {
    let mut counts = WordCountMap::new();
    for word in chunk.text.split_whitespace() {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    tracing::debug!(
        chunk = chunk.index,
        distinct = counts.len(),
        "counted chunk"
    );
    counts
}

/// Fold a per-chunk map into the running total, summing counts for shared
/// keys. Commutative and associative: merge order never affects the result.
pub fn merge_into(total: &mut WordCountMap, partial: WordCountMap) {
    for (word, count) in partial {
        *total.entry(word).or_insert(0) += count;
    }
}
