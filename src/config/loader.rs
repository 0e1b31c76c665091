//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating the few parameters there
//! are, and falling back to defaults when the file is absent.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// A missing file yields the default configuration; an unreadable or
/// unparsable file is an error (misconfiguration should be loud).
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  if !path.exists() {
    info!(path = %path.display(), "No config file, using defaults");
    return Ok(AppConfig::default());
  }

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig =
    toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    data_dir = %config.storage.data_dir,
    default_boat = %config.fleet.default_boat,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.storage.data_dir.trim().is_empty(),
    "storage.data_dir must not be empty"
  );
  anyhow::ensure!(
    !config.fleet.default_boat.trim().is_empty(),
    "fleet.default_boat must not be empty"
  );
  anyhow::ensure!(
    ["trace", "debug", "info", "warn", "error"]
      .contains(&config.log.level.as_str()),
    "log.level must be one of trace/debug/info/warn/error, got {}",
    config.log.level
  );
  Ok(())
}
