//! Configuration model loaded from external sources.

use chrono::FixedOffset;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::render::date::viewer_offset;

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings for talking to the explore endpoint.
pub struct ClientConfig {
    /// Site root, e.g. `http://localhost:5000`.
    #[validate(url)]
    pub base_url: String,
    /// Token echoed in the payload and the `X-CSRFToken` header.
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Offset used for card dates; the local offset when unset.
    #[serde(default)]
    #[validate(range(min = -1440, max = 1440))]
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "cli")]
    #[error("Error loading settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl ClientConfig {
    pub fn display_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
            .unwrap_or_else(viewer_offset)
    }

    /// Loads `{dir}/default.yaml`, an optional `{dir}/{app_env}.yaml` and
    /// `APP_*` environment variables, in increasing precedence.
    #[cfg(feature = "cli")]
    pub fn load(dir: &std::path::Path, app_env: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(
                config::File::with_name(&dir.join(app_env).to_string_lossy()).required(false),
            )
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let client_config: ClientConfig = settings.try_deserialize()?;
        client_config.validate()?;
        Ok(client_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClientConfig {
        ClientConfig {
            base_url: "http://localhost:5000".to_string(),
            csrf_token: None,
            timeout_secs: 30,
            user_agent: None,
            utc_offset_minutes: Some(120),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn base_url_must_be_a_url() {
        let config = ClientConfig {
            base_url: "localhost".to_string(),
            ..sample()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn display_offset_uses_configured_minutes() {
        assert_eq!(
            sample().display_offset(),
            FixedOffset::east_opt(2 * 3600).unwrap()
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn load_merges_default_and_profile_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "base_url: http://localhost:5000\ntimeout_secs: 10\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("test.yaml"), "csrf_token: abc\n").unwrap();

        let config = ClientConfig::load(dir.path(), "test").unwrap();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.user_agent, None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn load_rejects_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.yaml"), "base_url: not a url\n").unwrap();

        let result = ClientConfig::load(dir.path(), "local");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
