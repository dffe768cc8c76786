//! Command-line interface for Tally
//!
//! This module provides the main CLI structure and command handling for
//! Tally. It uses clap for argument parsing and provides a clean,
//! user-friendly interface.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

pub use commands::count::CountArgs;
pub use output::Output;

/// Tally - Word frequency counting for the command line
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Force overwrite without prompting
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Count word occurrences in a file or stdin
    Count(CountArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init,
    /// Validate configuration
    Validate,
    /// Show current configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        let result = match self.command {
            Some(Commands::Count(args)) => {
                commands::count::execute(args, self.config.as_deref(), &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), self.force, &output).await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        };

        // Failures reach the user through the styled handler, with the full
        // context chain inline.
        if let Err(err) = result {
            output.error(&format!("{:#}", err));
            std::process::exit(1);
        }
        Ok(())
    }
}
