//! Parallel execution strategy
//!
//! Producer-consumer over crossbeam channels: a producer thread feeds
//! indexed chunks into a bounded work channel, a fixed pool of worker
//! threads counts them independently (no shared mutable state), and the
//! coordinating thread collects every per-chunk map before performing the
//! merge single-threaded. The caller blocks until the whole pool has
//! returned; there is no partial result and no streaming.

use std::time::Instant;

use crossbeam::channel::{Receiver, Sender, bounded};

use super::counter::{count_chunk, merge_into};
use super::error::EngineError;
use super::partition::split_text;
use super::types::{Chunk, ProcessingResult, WordCountMap};

/// Count words by dispatching chunks across a worker pool sized to the
/// host's available parallelism.
///
/// Produces the same map as [`run_sequential`](super::run_sequential) for
/// any input and chunk count; per-chunk maps are restored to submission
/// order before the merge, though the merge itself is order-independent.
pub fn run_parallel(text: &str, chunk_count: usize) -> Result<ProcessingResult, EngineError> {
    super::validate_input(text, chunk_count)?;

    let start = Instant::now();
    let chunks = split_text(text, chunk_count);
    let total_chunks = chunks.len();
    let workers = optimal_workers(total_chunks);

    tracing::debug!(chunks = total_chunks, workers, "starting parallel run");

    let (work_tx, work_rx): (Sender<(usize, Chunk)>, Receiver<(usize, Chunk)>) =
        bounded(workers * 2);
    let (result_tx, result_rx): (Sender<(usize, WordCountMap)>, Receiver<(usize, WordCountMap)>) =
        bounded(workers * 4);

    let mut indexed = crossbeam::thread::scope(|s| {
        // Worker pool: each thread independently tokenizes and counts its
        // chunks, with no state shared between workers.
        for _ in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            s.spawn(move |_| {
                while let Ok((index, chunk)) = work_rx.recv() {
                    let counts = count_chunk(&chunk);
                    if result_tx.send((index, counts)).is_err() {
                        break; // Receiver dropped
                    }
                }
            });
        }

        // Producer: feed chunks in submission order.
        let work_tx_clone = work_tx.clone();
        s.spawn(move |_| {
            for (index, chunk) in chunks.into_iter().enumerate() {
                if work_tx_clone.send((index, chunk)).is_err() {
                    break; // Workers dropped
                }
            }
            drop(work_tx_clone);
        });

        // Drop the original senders so receivers know when work is done.
        drop(work_tx);
        drop(result_tx);

        collect_results(result_rx, total_chunks)
    })
    .map_err(|_| EngineError::processing_failure("worker thread panicked"))??;

    // Restore submission order before the merge. Completion order across
    // workers is not guaranteed and must not affect the result.
    indexed.sort_by_key(|(index, _)| *index);

    let mut totals = WordCountMap::new();
    for (_, partial) in indexed {
        merge_into(&mut totals, partial);
    }
    let elapsed = start.elapsed();

    tracing::debug!(
        chunks = total_chunks,
        workers,
        distinct = totals.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "parallel run complete"
    );
    Ok(ProcessingResult::new(totals, elapsed, total_chunks, workers))
}

/// Pool size: available hardware parallelism, capped at the number of
/// chunks. Not user-configurable.
fn optimal_workers(chunk_count: usize) -> usize {
    std::cmp::min(num_cpus::get().max(1), chunk_count.max(1))
}

/// Gather every per-chunk map. All-or-nothing: a shortfall means a worker
/// died before finishing its share.
fn collect_results(
    result_rx: Receiver<(usize, WordCountMap)>,
    total_chunks: usize,
) -> Result<Vec<(usize, WordCountMap)>, EngineError> {
    let mut results = Vec::with_capacity(total_chunks);
    while let Ok(entry) = result_rx.recv() {
        results.push(entry);
        if results.len() >= total_chunks {
            break;
        }
    }

    if results.len() < total_chunks {
        return Err(EngineError::processing_failure(format!(
            "workers returned {} of {} chunk results",
            results.len(),
            total_chunks
        )));
    }
    Ok(results)
}
