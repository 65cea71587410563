//! `portage config` — Show the effective configuration.

use portage_config::AppConfig;
use portage_core::error::{Error, Result};

pub fn show(config: &AppConfig) -> Result<()> {
    println!("# {}", AppConfig::config_path().display());
    let toml_str = toml::to_string_pretty(config).map_err(|e| Error::Config {
        message: e.to_string(),
    })?;
    println!("{toml_str}");
    Ok(())
}
