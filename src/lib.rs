//! # Tally - Word Frequency Counting for the Command Line
//!
//! Tally counts word occurrences in user-supplied text, either in a single
//! sequential pass or split across a pool of worker threads sized to the
//! host's available parallelism. Both strategies produce identical counts;
//! only the elapsed time differs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Count words in a file sequentially
//! tally count book.txt
//!
//! # Split the text into 8 chunks and count them in parallel
//! tally count book.txt --mode parallel --chunks 8
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod report;

pub use cli::{Cli, Output};
pub use config::TallyConfig;
pub use engine::{run_parallel, run_sequential};

/// Result type alias for Tally operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
