//! Runtime configuration.
//!
//! Defaults suit the demo binary and tests. `from_env` starts from the JSON file named by
//! `INVENTORY_ADMIN_CONFIG` when it is set, then overrides individual values from the other
//! `INVENTORY_ADMIN_*` variables.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ENV_CONFIG_FILE: &str = "INVENTORY_ADMIN_CONFIG";
pub const ENV_CHANNEL_BUFFER: &str = "INVENTORY_ADMIN_CHANNEL_BUFFER";
pub const ENV_STATUS_UPDATE_DELAY_MS: &str = "INVENTORY_ADMIN_STATUS_UPDATE_DELAY_MS";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "INVENTORY_ADMIN_LOW_STOCK_THRESHOLD";
pub const ENV_SEED_FIXTURES: &str = "INVENTORY_ADMIN_SEED_FIXTURES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("Cannot read config file {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("Malformed config: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Request queue capacity of each actor.
    pub channel_buffer: usize,
    /// Simulated round trip before a status change is applied.
    pub status_update_delay_ms: u64,
    /// Variations at or below this stock (and above zero) count as low stock.
    pub low_stock_threshold: u32,
    /// Load `fixtures/seed.json` on start.
    pub seed_fixtures: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            status_update_delay_ms: 500,
            low_stock_threshold: 5,
            seed_fixtures: true,
        }
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

impl AdminConfig {
    /// Defaults overridden by any `INVENTORY_ADMIN_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AdminConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(path.trim())?,
            None => Self::default(),
        };
        if let Some(value) = lookup(ENV_CHANNEL_BUFFER) {
            config.channel_buffer = parse(ENV_CHANNEL_BUFFER, value)?;
        }
        if let Some(value) = lookup(ENV_STATUS_UPDATE_DELAY_MS) {
            config.status_update_delay_ms = parse(ENV_STATUS_UPDATE_DELAY_MS, value)?;
        }
        if let Some(value) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold = parse(ENV_LOW_STOCK_THRESHOLD, value)?;
        }
        if let Some(value) = lookup(ENV_SEED_FIXTURES) {
            config.seed_fixtures = parse(ENV_SEED_FIXTURES, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                var: ENV_CHANNEL_BUFFER,
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn status_update_delay(&self) -> Duration {
        Duration::from_millis(self.status_update_delay_ms)
    }

    pub fn with_status_update_delay(mut self, delay: Duration) -> Self {
        self.status_update_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_seed_fixtures(mut self, seed: bool) -> Self {
        self.seed_fixtures = seed;
        self
    }
}
