//! Endpoint configuration.
//!
//! Defaults point at the deployed service. The health check lives on a
//! separate host, so it is configured as a full URL rather than a path.

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://to-do-list-defazio.up.railway.app/api";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:3000/health";

pub const BASE_URL_ENV: &str = "TASKS_API_URL";
pub const HEALTH_URL_ENV: &str = "TASKS_HEALTH_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub health_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config for a single host serving both the API and `/health`, as the
    /// mock server does.
    pub fn for_host(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            base_url: format!("{origin}/api"),
            health_url: format!("{origin}/health"),
        }
    }

    /// Defaults overridden by `TASKS_API_URL` and `TASKS_HEALTH_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(BASE_URL_ENV) {
            config.base_url = check_url(BASE_URL_ENV, value)?;
        }
        if let Some(value) = lookup(HEALTH_URL_ENV) {
            config.health_url = check_url(HEALTH_URL_ENV, value)?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.base_url = check_url("--base-url", value.to_string())?;
        Ok(self)
    }

    pub fn with_health_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.health_url = check_url("--health-url", value.to_string())?;
        Ok(self)
    }
}

fn check_url(key: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty {
            key: key.to_string(),
        });
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            key: key.to_string(),
            value,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_overrides_each_url() {
        let config = ClientConfig::from_lookup(|key| match key {
            BASE_URL_ENV => Some("http://127.0.0.1:4000/api".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:4000/api");
        assert_eq!(config.health_url, DEFAULT_HEALTH_URL);
    }

    #[test]
    fn rejects_empty_and_non_http_values() {
        let err = ClientConfig::from_lookup(|key| (key == HEALTH_URL_ENV).then(|| "  ".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Empty {
                key: HEALTH_URL_ENV.to_string()
            }
        );

        let err = ClientConfig::default().with_base_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn for_host_builds_both_urls() {
        let config = ClientConfig::for_host("http://127.0.0.1:9999/");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/api");
        assert_eq!(config.health_url, "http://127.0.0.1:9999/health");
    }
}
