// In: src/config.rs

//! The single source of truth for run-length-encoder configuration.
//!
//! `EncoderConfig` is created once at the process boundary (from the
//! `RLE_ENCODER_CONFIG` environment variable, or defaults) and then shared
//! read-only through an `Arc<EncoderConfig>`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::EncoderError;

/// Name of the environment variable holding a JSON `EncoderConfig` document.
pub const CONFIG_ENV_VAR: &str = "RLE_ENCODER_CONFIG";

//==================================================================================
// I. Configuration Enums
//==================================================================================

/// Minimum severity written by the logger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

//==================================================================================
// II. The Unified EncoderConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// Minimum log level. `RUST_LOG` still overrides it when set.
    #[serde(default)]
    pub log_level: LogLevel,

    /// If true, every invocation logs the raw body it received before encoding.
    #[serde(default = "default_true")]
    pub log_request_body: bool,

    /// Bodies longer than this are truncated in the log line. The encoded
    /// response is never truncated.
    #[serde(default = "default_max_logged_body_chars")]
    pub max_logged_body_chars: usize,

    /// Value of the `Content-Type` header on every response.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_request_body: true,
            max_logged_body_chars: default_max_logged_body_chars(),
            content_type: default_content_type(),
        }
    }
}

impl EncoderConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self, EncoderError> {
        let config: EncoderConfig = serde_json::from_str(raw)
            .map_err(|e| EncoderError::ConfigError(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `RLE_ENCODER_CONFIG`, falling back to
    /// defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self, EncoderError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Self::from_json(&raw).map_err(|e| match e {
                EncoderError::ConfigError(msg) => {
                    EncoderError::ConfigError(format!("{}: {}", CONFIG_ENV_VAR, msg))
                }
                other => other,
            }),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(EncoderError::ConfigError(format!(
                "could not read {}: {}",
                CONFIG_ENV_VAR, e
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), EncoderError> {
        if self.content_type.trim().is_empty() {
            return Err(EncoderError::ConfigError(
                "content_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

fn default_max_logged_body_chars() -> usize {
    4096
}

fn default_content_type() -> String {
    "text/plain".to_string()
}
