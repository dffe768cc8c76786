//! Text partitioning
//!
//! Splits raw input into contiguous chunks by byte position. The requested
//! chunk count is a hint, not a guarantee: the step size is
//! `len / num_chunks`, so the scan can produce more chunks than requested
//! when the length is not an exact multiple, and collapses to a single chunk
//! when the hint exceeds the text length (step size rounds to 0).

use super::types::Chunk;

/// Split `text` into roughly `num_chunks` contiguous chunks.
///
/// Each boundary is advanced forward to the next ASCII whitespace byte so
/// that no token is ever cut in half across two chunks. A naive byte-position
/// split would produce two spurious fragment tokens wherever a boundary
/// landed mid-word, and the sequential and parallel strategies would then
/// disagree with a single-pass count. Stopping only at ASCII whitespace also
/// keeps every cut on a UTF-8 character boundary.
///
/// Empty text yields zero chunks, as does a chunk count of 0; callers
/// reject a zero count as invalid before partitioning.
pub fn split_text(text: &str, num_chunks: usize) -> Vec<Chunk> {
    if text.is_empty() || num_chunks == 0 {
        return Vec::new();
    }

    let chunk_size = text.len() / num_chunks;
    if chunk_size == 0 {
        // Hint exceeds the text length: degenerate single-chunk pass.
        return vec![Chunk::new(1, text)];
    }

    let bytes = text.as_bytes();
    let mut chunks = Vec::with_capacity(num_chunks);
    let mut start = 0;
    let mut index = 1;
    while start < text.len() {
        let mut end = (start + chunk_size).min(text.len());
        while end < text.len() && !bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        chunks.push(Chunk::new(index, &text[start..end]));
        start = end;
        index += 1;
    }

    tracing::debug!(
        requested = num_chunks,
        produced = chunks.len(),
        chunk_size,
        "partitioned input"
    );
    chunks
}
