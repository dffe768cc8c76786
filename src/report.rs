//! Result rendering and persistence
//!
//! The only output format beyond the terminal is the plain-text dump of
//! results: one `'word': count` pair per line, a blank line, then the
//! trailing `Time taken: <seconds> seconds` line. The map itself is
//! unordered, so the rendering sorts by descending count (ties broken
//! lexicographically) to stay deterministic.

use std::path::Path;

use crate::engine::{EngineError, ProcessingResult};

/// Render the plain-text report.
pub fn render_text(result: &ProcessingResult) -> String {
    let mut entries: Vec<(&str, u64)> = result
        .counts
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = String::new();
    for (word, count) in entries {
        out.push_str(&format!("'{}': {}\n", word, count));
    }
    out.push_str(&format!("\nTime taken: {:.2} seconds\n", result.elapsed_seconds));
    out
}

/// Render the result as pretty JSON (counts, elapsed seconds, stats).
pub fn render_json(result: &ProcessingResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Persist a rendered report, surfacing failures as the engine's I/O error
/// so a combined pipeline propagates them unchanged.
pub fn save_report(path: &Path, rendered: &str) -> Result<(), EngineError> {
    std::fs::write(path, rendered)?;
    Ok(())
}
