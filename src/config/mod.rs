//! Configuration Module - TOML-based Application Configuration
//!
//! Loads configuration from `config.toml`. Every field has a default,
//! and a missing file is fine: the tracker should run out of the box
//! with the seed fleet and a local data directory.

pub mod loader;

use serde::Deserialize;

use crate::domain::SEED_BOATS;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Where the expense document lives.
  pub storage: StorageConfig,
  /// Logging configuration.
  pub log: LogConfig,
  /// Fleet defaults for the presentation layer.
  pub fleet: FleetConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  /// Directory holding `boat-expenses.json`.
  pub data_dir: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: "data".to_string(),
    }
  }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
  /// Log level (trace, debug, info, warn, error).
  pub level: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
    }
  }
}

/// Fleet defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
  /// Boat assumed when a command omits one.
  pub default_boat: String,
}

impl Default for FleetConfig {
  fn default() -> Self {
    Self {
      default_boat: SEED_BOATS[0].to_string(),
    }
  }
}
