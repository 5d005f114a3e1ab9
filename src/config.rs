use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Carepath";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_REASONING_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_REASONING_TIMEOUT_SECS: u64 = 8;

/// Idle follow-up sessions are purged after this long.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "carepath_lib=debug,tower_http=debug,info"
    } else {
        "carepath_lib=info,tower_http=info,warn"
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub reasoning_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub reasoning_timeout: Duration,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_or(
            get("CAREPATH_BIND_ADDR"),
            "CAREPATH_BIND_ADDR",
            DEFAULT_BIND_ADDR,
        )?;
        let max_tokens = parse_or(
            get("CAREPATH_MAX_TOKENS"),
            "CAREPATH_MAX_TOKENS",
            &DEFAULT_MAX_TOKENS.to_string(),
        )?;
        let timeout_secs: u64 = parse_or(
            get("CAREPATH_REASONING_TIMEOUT_SECS"),
            "CAREPATH_REASONING_TIMEOUT_SECS",
            &DEFAULT_REASONING_TIMEOUT_SECS.to_string(),
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CAREPATH_REASONING_TIMEOUT_SECS",
                value: "0".into(),
            });
        }

        Ok(Self {
            bind_addr,
            reasoning_url: get("CAREPATH_REASONING_URL")
                .unwrap_or_else(|| DEFAULT_REASONING_URL.to_string()),
            api_key: get("ANTHROPIC_API_KEY"),
            model: get("CAREPATH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            reasoning_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            reasoning_url: DEFAULT_REASONING_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            reasoning_timeout: Duration::from_secs(DEFAULT_REASONING_TIMEOUT_SECS),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value: raw })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn values_override_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("CAREPATH_BIND_ADDR", "0.0.0.0:9000"),
            ("CAREPATH_MODEL", "some-model"),
            ("CAREPATH_MAX_TOKENS", "512"),
            ("CAREPATH_REASONING_TIMEOUT_SECS", "3"),
            ("ANTHROPIC_API_KEY", "sk-test"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.model, "some-model");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.reasoning_timeout, Duration::from_secs(3));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err =
            ServiceConfig::from_lookup(lookup(&[("CAREPATH_MAX_TOKENS", "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "CAREPATH_MAX_TOKENS",
                value: "lots".into()
            }
        );
        assert!(ServiceConfig::from_lookup(lookup(&[("CAREPATH_BIND_ADDR", "nowhere")])).is_err());
        assert!(
            ServiceConfig::from_lookup(lookup(&[("CAREPATH_REASONING_TIMEOUT_SECS", "0")])).is_err()
        );
    }

    #[test]
    fn app_name_is_carepath() {
        assert_eq!(APP_NAME, "Carepath");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
