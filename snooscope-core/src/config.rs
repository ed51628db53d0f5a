use crate::error::{ConfigError, CoreError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Desktop-browser user agent sent with every listing request. The public
/// endpoint rejects obviously non-browser agents far more often.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

const CONFIG_FILE: &str = "snooscope.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub user_agent: String,
    /// Comments requested per page. The listing endpoint caps this at 100.
    pub page_limit: u32,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_limit: 99,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load `snooscope.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw).map_err(ConfigError::Parse)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_limit == 0 || self.page_limit > 100 {
            return Err(ConfigError::InvalidValue {
                field: "page_limit".to_string(),
                value: self.page_limit.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_limit, 99);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("page_limit = 50").unwrap();
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_page_limit_bounds() {
        let config: AppConfig = toml::from_str("page_limit = 0").unwrap();
        assert!(config.validate().is_err());

        let config: AppConfig = toml::from_str("page_limit = 101").unwrap();
        assert!(config.validate().is_err());

        let config: AppConfig = toml::from_str("page_limit = 100").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.page_limit, 99);
    }
}
