//! Client configuration
//!
//! Configuration is an explicit object handed to the client at construction
//! time, never process-wide state. The environment is only consulted in
//! [`ClientConfig::from_env`], so tests can build configs directly against a
//! fake server.

use crate::error::{Error, Result};
use crate::types::{OptionStringExt, RunMode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL used when running against a local development API
pub const DEV_BASE_URL: &str = "http://localhost:8000/";

/// Base URL used in production
pub const PROD_BASE_URL: &str = "https://api.parkkiopas.fi/";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "PARKMON_API_URL";

/// Environment variable selecting the run mode
pub const ENV_MODE: &str = "PARKMON_MODE";

/// Configuration for the monitoring client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are resolved against
    pub base_url: String,

    /// Run mode (affects logging verbosity, not protocol behavior)
    #[serde(default)]
    pub mode: RunMode,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("parkmon-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_mode(RunMode::default())
    }
}

impl ClientConfig {
    /// Create a config with the default base URL for the given mode
    pub fn for_mode(mode: RunMode) -> Self {
        let base_url = match mode {
            RunMode::Development => DEV_BASE_URL,
            RunMode::Production => PROD_BASE_URL,
        };
        Self {
            base_url: base_url.to_string(),
            mode,
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Create a config with an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Build a config from the process environment.
    ///
    /// `PARKMON_MODE` selects the mode (`development`/`production`, default
    /// production), `PARKMON_API_URL` overrides the mode's base URL. Empty
    /// values are treated as unset.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_MODE).ok(),
        )
    }

    /// Resolve a config from raw environment values
    fn resolve(api_url: Option<String>, mode: Option<String>) -> Self {
        let mode = mode
            .none_if_empty()
            .and_then(|m| RunMode::parse(&m))
            .unwrap_or_default();
        let mut config = Self::for_mode(mode);
        if let Some(url) = api_url.none_if_empty() {
            config.base_url = url;
        }
        config
    }

    /// Validate the configuration, returning the parsed base URL.
    ///
    /// A malformed base URL is a programmer error and the one condition the
    /// client reports by returning an error instead of a callback result.
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_config_value("base_url", e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_config_value(
                "base_url",
                format!("'{}' cannot be used as a base URL", self.base_url),
            ));
        }
        Ok(url)
    }

    /// Default log filter directive for this mode
    pub fn log_filter(&self) -> &'static str {
        if self.mode.is_development() {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        let config = ClientConfig::default();
        assert_eq!(config.mode, RunMode::Production);
        assert_eq!(config.base_url, PROD_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_for_mode_development() {
        let config = ClientConfig::for_mode(RunMode::Development);
        assert_eq!(config.base_url, DEV_BASE_URL);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ClientConfig::resolve(None, None);
        assert_eq!(config.base_url, PROD_BASE_URL);
        assert_eq!(config.mode, RunMode::Production);
    }

    #[test]
    fn test_resolve_mode_selects_base_url() {
        let config = ClientConfig::resolve(None, Some("development".to_string()));
        assert_eq!(config.base_url, DEV_BASE_URL);
        assert_eq!(config.mode, RunMode::Development);
    }

    #[test]
    fn test_resolve_url_override_wins() {
        let config = ClientConfig::resolve(
            Some("https://api.example.com/".to_string()),
            Some("dev".to_string()),
        );
        assert_eq!(config.base_url, "https://api.example.com/");
        assert_eq!(config.mode, RunMode::Development);
    }

    #[test]
    fn test_resolve_empty_values_are_unset() {
        let config = ClientConfig::resolve(Some(String::new()), Some(String::new()));
        assert_eq!(config.base_url, PROD_BASE_URL);
        assert_eq!(config.mode, RunMode::Production);
    }

    #[test]
    fn test_validate_accepts_default_urls() {
        assert!(ClientConfig::for_mode(RunMode::Development).validate().is_ok());
        assert!(ClientConfig::for_mode(RunMode::Production).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let config = ClientConfig::with_base_url("not a url");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_log_filter_by_mode() {
        assert_eq!(ClientConfig::for_mode(RunMode::Production).log_filter(), "info");
        assert_eq!(
            ClientConfig::for_mode(RunMode::Development).log_filter(),
            "debug"
        );
    }
}
