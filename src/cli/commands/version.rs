//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    output.header("Tally Version Information");
    output.key_value("Version:", &format!("{} v{}", name, version));
    output.key_value("Description:", description);
    output.key_value("Repository:", repository);
    output.blank_line();
    output.key_value("Rust edition:", "2024");
    output.key_value("Target:", std::env::consts::ARCH);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );
    output.blank_line();
    output.info("Run 'tally --help' for usage information");

    Ok(())
}
