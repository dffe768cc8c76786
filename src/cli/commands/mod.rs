//! Command implementations for the Tally CLI
//!
//! Each command is organized into its own module for better maintainability.

pub mod config;
pub mod count;
pub mod version;
