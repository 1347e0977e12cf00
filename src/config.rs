//! # Settings
//!
//! Layered configuration. Later sources override earlier ones:
//!
//! 1. `config/default.toml`
//! 2. `config/{environment}.toml` (based on `QUOTE_RELAY_ENV`)
//! 3. Environment variables prefixed with `QUOTE_RELAY__`, nested with `__`
//!    (e.g. `QUOTE_RELAY__SERVER__PORT=8080`)
//!
//! Every file is optional and every key has a default.

use crate::application::services::CipherConfig;
use crate::infrastructure::quote_source::DEFAULT_QUOTE_URL;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the active profile.
pub const ENV_VAR: &str = "QUOTE_RELAY_ENV";

/// Prefix for override variables.
pub const ENV_PREFIX: &str = "QUOTE_RELAY";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Listener configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream quote source.
    #[serde(default)]
    pub quote_source: QuoteSourceConfig,
    /// Cipher limits.
    #[serde(default)]
    pub cipher: CipherConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Reference data store.
    #[serde(default)]
    pub reference: ReferenceConfig,
}

impl Settings {
    /// Loads settings from configuration files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or a value is out of
    /// range.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quote_source.url.trim().is_empty() {
            return Err(ConfigError::Invalid("quote_source.url is empty".into()));
        }
        if self.quote_source.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "quote_source.timeout_ms must be positive".into(),
            ));
        }
        if self.cipher.rsa_key_bits < MIN_RSA_KEY_BITS {
            return Err(ConfigError::Invalid(format!(
                "cipher.rsa_key_bits must be at least {MIN_RSA_KEY_BITS}"
            )));
        }
        if self.cipher.max_input_bytes == 0 {
            return Err(ConfigError::Invalid(
                "cipher.max_input_bytes must be positive".into(),
            ));
        }
        Ok(())
    }
}

const MIN_RSA_KEY_BITS: usize = 1024;

/// Listener configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.host '{}': {e}", self.host)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

/// Upstream quote source configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct QuoteSourceConfig {
    /// Endpoint returning the quote document.
    #[serde(default = "default_quote_url")]
    pub url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for QuoteSourceConfig {
    fn default() -> Self {
        Self {
            url: default_quote_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_quote_url() -> String {
    DEFAULT_QUOTE_URL.into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Log output configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".into()
}

/// Reference data configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ReferenceConfig {
    /// Seed the store with the built-in currency records at startup.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.quote_source.url, DEFAULT_QUOTE_URL);
        assert_eq!(settings.quote_source.timeout_ms, 10_000);
        assert_eq!(settings.cipher.rsa_key_bits, 2048);
        assert_eq!(settings.cipher.max_input_bytes, 1_048_576);
        assert_eq!(settings.logging.filter, "info");
        assert!(!settings.logging.json);
        assert!(settings.reference.seed_defaults);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = from_toml(
            r#"
            [server]
            port = 8080

            [cipher]
            max_input_bytes = 64
            "#,
        );
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.cipher.max_input_bytes, 64);
        assert_eq!(settings.cipher.rsa_key_bits, 2048);
        assert_eq!(settings.quote_source.timeout_ms, 10_000);
    }

    #[test]
    fn socket_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server.socket_addr().unwrap().port(), 5000);

        let bad = ServerConfig {
            host: "not a host".into(),
            port: 1,
        };
        assert!(matches!(bad.socket_addr(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut settings = Settings::default();
        settings.cipher.rsa_key_bits = 512;
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));

        let mut settings = Settings::default();
        settings.quote_source.timeout_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.quote_source.url = " ".into();
        assert!(settings.validate().is_err());
    }
}
