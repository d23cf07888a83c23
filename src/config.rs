//! Client configuration.
//!
//! `ClientConfig` is built once at startup and handed to
//! [`SteamClient`](crate::client::SteamClient); nothing reads global state.

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Counter-Strike: Global Offensive.
pub const DEFAULT_APP_ID: u32 = 730;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_KEY: &str = "STEAM_API_KEY";
pub const ENV_BASE_URL: &str = "STEAM_API_BASE_URL";
pub const ENV_APP_ID: &str = "STEAM_APP_ID";

/// Credentials and endpoints for the Steam Web API.
///
/// # Examples
///
/// ```rust
/// use csstat::ClientConfig;
///
/// let config = ClientConfig::new("KEY").with_app_id(440);
/// assert_eq!(config.app_id, 440);
/// assert_eq!(config.base_url, "https://api.steampowered.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub app_id: u32,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Trailing `/` is stripped so paths can be appended directly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_app_id(mut self, app_id: u32) -> Self {
        self.app_id = app_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `STEAM_API_KEY`, `STEAM_API_BASE_URL` and `STEAM_APP_ID`.
    ///
    /// Only the API key is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;
        let mut config = Self::new(api_key.trim());

        if let Some(base_url) = var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Some(app_id) = var(ENV_APP_ID) {
            let parsed = app_id.trim().parse().map_err(|_| ConfigError::Invalid {
                name: ENV_APP_ID,
                value: app_id.clone(),
            })?;
            config = config.with_app_id(parsed);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(env(&[(ENV_API_KEY, "abc")])).unwrap();
        assert_eq!(config, ClientConfig::new("abc"));
        assert_eq!(config.app_id, 730);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            ClientConfig::from_lookup(env(&[])),
            Err(ConfigError::Missing(ENV_API_KEY))
        );
        assert_eq!(
            ClientConfig::from_lookup(env(&[(ENV_API_KEY, "  ")])),
            Err(ConfigError::Missing(ENV_API_KEY))
        );
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(env(&[
            (ENV_API_KEY, "abc"),
            (ENV_BASE_URL, "http://127.0.0.1:8080/"),
            (ENV_APP_ID, "440"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.app_id, 440);
    }

    #[test]
    fn test_invalid_app_id() {
        let err = ClientConfig::from_lookup(env(&[(ENV_API_KEY, "abc"), (ENV_APP_ID, "csgo")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: ENV_APP_ID,
                value: "csgo".into()
            }
        );
    }
}
