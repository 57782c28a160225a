//! Show or create the config file.

use std::path::PathBuf;

use otr_common::config::{config_file_path, AppConfig};

pub fn run(init: bool, explicit: Option<PathBuf>, config: &AppConfig) -> anyhow::Result<()> {
    let path = explicit.unwrap_or_else(config_file_path);

    if init {
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if path != config_file_path() {
            anyhow::bail!(
                "--init only writes the standard location ({})",
                config_file_path().display()
            );
        }
        AppConfig::default().save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let status = if path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };
    println!("Config file: {}{status}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
