//! Show or write the effective configuration.

use spaceprobe_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, init: bool) -> anyhow::Result<()> {
    if init {
        let path = config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    println!("# {}", config_file_path().display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
