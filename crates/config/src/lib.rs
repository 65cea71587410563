//! Configuration loading, validation, and management for Portage.
//!
//! Loads configuration from `~/.portage/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.portage/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON-lines entity index used as the knowledge model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Knowledge index tuning
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Default base prompts per enrichment kind
    #[serde(default)]
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Maximum entities returned by a free-text search
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Maximum similar components returned per lookup
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
}

fn default_search_limit() -> usize {
    10
}
fn default_similar_limit() -> usize {
    5
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            similar_limit: default_similar_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    #[serde(default = "default_migration_prompt")]
    pub migration: String,

    #[serde(default = "default_refactor_prompt")]
    pub refactor: String,

    #[serde(default = "default_test_prompt")]
    pub test: String,
}

fn default_migration_prompt() -> String {
    "Migrate the following file to the project's target stack. Keep its behaviour identical and return the complete migrated file.".into()
}
fn default_refactor_prompt() -> String {
    "Refactor the following file to resolve the detected issues. Return the complete updated file.".into()
}
fn default_test_prompt() -> String {
    "Write a complete test suite for the following component.".into()
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            migration: default_migration_prompt(),
            refactor: default_refactor_prompt(),
            test: default_test_prompt(),
        }
    }
}

const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl AppConfig {
    /// Load configuration from the default path (~/.portage/config.toml).
    ///
    /// Environment overrides:
    /// - `PORTAGE_INDEX` replaces `index_path`
    /// - `PORTAGE_LOG_FORMAT` replaces `logging.format`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(index) = lookup("PORTAGE_INDEX").filter(|v| !v.is_empty()) {
            self.index_path = Some(PathBuf::from(index));
        }
        if let Some(format) = lookup("PORTAGE_LOG_FORMAT").filter(|v| !v.is_empty()) {
            self.logging.format = format;
        }
    }

    /// Get the configuration directory path (`$PORTAGE_HOME` or `~/.portage`).
    pub fn config_dir() -> PathBuf {
        match std::env::var("PORTAGE_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs_home().join(".portage"),
        }
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.logging.format
            )));
        }

        if self.knowledge.search_limit == 0 || self.knowledge.similar_limit == 0 {
            return Err(ConfigError::ValidationError(
                "knowledge.search_limit and knowledge.similar_limit must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_path: None,
            logging: LoggingConfig::default(),
            knowledge: KnowledgeConfig::default(),
            prompts: PromptsConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
