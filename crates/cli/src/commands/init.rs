//! `portage init` — First-time setup.

use portage_config::AppConfig;
use portage_core::error::Result;

pub fn run() -> Result<()> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    println!("🧭 Portage — Setup");
    println!("==================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("  Config file exists, leaving it untouched: {}", config_path.display());
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created {}", config_path.display());
    }

    println!();
    println!("Next: point `index_path` in config.toml (or PORTAGE_INDEX) at a");
    println!("JSON-lines entity index, then run `portage migrate <file>`.");
    Ok(())
}
