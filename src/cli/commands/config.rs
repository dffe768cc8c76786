//! Configuration command implementation

use anyhow::{Context, Result, bail};

use crate::cli::{ConfigCommands, Output};
use crate::config::{CONFIG_FILE, TallyConfig};

pub async fn execute(
    cmd: ConfigCommands,
    config_path: Option<&str>,
    force: bool,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(config_path, force, output),
        ConfigCommands::Validate => validate(config_path, output),
        ConfigCommands::Show => show(config_path, output),
    }
}

fn init(config_path: Option<&str>, force: bool, output: &Output) -> Result<()> {
    let path = config_path.unwrap_or(CONFIG_FILE);
    if std::path::Path::new(path).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path);
    }
    std::fs::write(path, TallyConfig::template())
        .with_context(|| format!("Failed to write {}", path))?;
    output.success(&format!("Wrote default configuration to {}", path));
    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TallyConfig::load(config_path)?;
    config.validate()?;
    output.success("Configuration is valid");
    output.key_value("default_mode:", &config.default_mode.to_string());
    output.key_value("default_chunks:", &config.default_chunks.to_string());
    Ok(())
}

fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TallyConfig::load(config_path)?;
    output.header("Effective configuration");
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}
