use crate::error::{HttpUtilsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("http-utils/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(base_url) = std::env::var("HTTP_UTILS_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("HTTP_UTILS_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| HttpUtilsError::config_error("Invalid HTTP_UTILS_TIMEOUT_SECS"))?;
        }

        if let Ok(user_agent) = std::env::var("HTTP_UTILS_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.user_agent = user_agent;
            }
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            HttpUtilsError::config_error(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| HttpUtilsError::config_error(format!("Failed to parse config file: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("http-utils/"));
    }

    #[test]
    fn toml_overrides_and_fills_missing_fields() {
        let config = ClientConfig::from_toml_str(
            r#"
            base_url = "http://localhost:3000/"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, ClientConfig::default().user_agent);
    }

    #[test]
    fn toml_type_mismatch_is_config_error() {
        let err = ClientConfig::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, HttpUtilsError::ConfigError(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let path = std::env::temp_dir().join("http-utils-no-such-config.toml");
        let err = ClientConfig::from_file(&path).unwrap_err();
        match err {
            HttpUtilsError::ConfigError(msg) => assert!(msg.starts_with("Failed to read config file")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    // The only test touching HTTP_UTILS_* variables, so it cannot race another.
    #[test]
    fn env_overrides_defaults() {
        std::env::set_var("HTTP_UTILS_BASE_URL", "http://localhost:3000");
        std::env::set_var("HTTP_UTILS_TIMEOUT_SECS", " 7 ");
        std::env::set_var("HTTP_UTILS_USER_AGENT", "   ");
        let config = ClientConfig::from_env();

        std::env::set_var("HTTP_UTILS_TIMEOUT_SECS", "soon");
        let invalid = ClientConfig::from_env();

        for name in ["HTTP_UTILS_BASE_URL", "HTTP_UTILS_TIMEOUT_SECS", "HTTP_UTILS_USER_AGENT"] {
            std::env::remove_var(name);
        }

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.user_agent, ClientConfig::default().user_agent);

        match invalid.unwrap_err() {
            HttpUtilsError::ConfigError(msg) => assert_eq!(msg, "Invalid HTTP_UTILS_TIMEOUT_SECS"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("http-utils-config-{}.toml", std::process::id()));
        std::fs::write(&path, "user_agent = \"tester/1\"\n").unwrap();
        let config = ClientConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.user_agent, "tester/1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
