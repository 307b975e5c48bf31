//! Runtime configuration.
//!
//! Layered from lowest to highest precedence: built-in defaults, an
//! optional JSON file, the `BACKEND_HOST` environment variable and finally
//! command line flags.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{ConfigError, Error, IoError},
    read::read_to_string,
};

pub const DEFAULT_BACKEND_HOST: &str = "http://localhost:8080";
pub const BACKEND_HOST_ENV: &str = "BACKEND_HOST";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analysis service.
    pub backend_host: String,

    /// Language the user writes in.
    pub language_spoken: String,

    /// Language the user is learning; phrases are translated into it.
    pub language_learned: String,

    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_host: DEFAULT_BACKEND_HOST.into(),
            language_spoken: "en".into(),
            language_learned: "de".into(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|error| ConfigError::Serialization(error.to_string()))
    }

    /// Defaults overlaid with the file at `path`, when one is given.
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let buffer = read_to_string(path.as_ref()).await.map_err(|error| match error {
            Error::Io(IoError::File(kind)) => Error::config(ConfigError::File(kind)),
            Error::Io(IoError::Reader(kind)) => Error::config(ConfigError::Reader(kind)),
            other => other,
        })?;

        debug!(path = ?path.as_ref(), "loaded configuration file");
        Ok(Self::from_json(&buffer)?)
    }

    /// Applies the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(BACKEND_HOST_ENV).filter(|host| !host.trim().is_empty()) {
            self.backend_host = host;
        }

        self
    }

    /// Checks the host scheme and strips trailing slashes.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let host = self.backend_host.trim().trim_end_matches('/');

        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ConfigError::Host(self.backend_host));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }

        self.backend_host = host.to_string();
        Ok(self)
    }

    #[inline]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_host, path)
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{ErrorKind, Write};

    use super::{Config, BACKEND_HOST_ENV, DEFAULT_BACKEND_HOST};
    use crate::error::{ConfigError, Error};

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.backend_host, DEFAULT_BACKEND_HOST);
        assert_eq!(config.language_spoken, "en");
        assert_eq!(config.language_learned, "de");
        assert_eq!(config.timeout().as_secs(), 10);
    }

    #[test]
    fn test_config_partial_json() {
        let config = Config::from_json(r#"{"language_learned": "ru"}"#).unwrap();

        assert_eq!(config.language_learned, "ru");
        assert_eq!(config.backend_host, DEFAULT_BACKEND_HOST);
    }

    #[test]
    fn test_config_invalid_json() {
        let error = Config::from_json("{").unwrap_err();

        assert!(matches!(error, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_config_env_overrides_host() {
        let config = Config::default().with_env_from(|key| {
            (key == BACKEND_HOST_ENV).then(|| "https://api.grammr.app".to_string())
        });

        assert_eq!(config.backend_host, "https://api.grammr.app");
    }

    #[test]
    fn test_config_blank_env_ignored() {
        let config = Config::default().with_env_from(|_| Some("  ".to_string()));

        assert_eq!(config.backend_host, DEFAULT_BACKEND_HOST);
    }

    #[test]
    fn test_config_validate_strips_trailing_slash() {
        let config = Config {
            backend_host: "https://api.grammr.app//".into(),
            ..Config::default()
        };

        let config = config.validate().unwrap();

        assert_eq!(config.backend_host, "https://api.grammr.app");
        assert_eq!(
            config.endpoint("/api/v1/inflection"),
            "https://api.grammr.app/api/v1/inflection"
        );
    }

    #[test]
    fn test_config_validate_rejects_scheme() {
        let config = Config {
            backend_host: "localhost:8080".into(),
            ..Config::default()
        };

        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Host("localhost:8080".into())
        );
    }

    #[test]
    fn test_config_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };

        assert_eq!(config.validate().unwrap_err(), ConfigError::Timeout);
    }

    #[tokio::test]
    async fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"backend_host": "http://10.0.0.2:9000", "timeout_secs": 3}}"#).unwrap();

        let config = Config::load(Some(file.path())).await.unwrap();

        assert_eq!(config.backend_host, "http://10.0.0.2:9000");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.language_spoken, "en");
    }

    #[tokio::test]
    async fn test_config_load_none() {
        let config = Config::load(None::<&str>).await.unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_missing_file() {
        let error = Config::load(Some("missing/grammr.json")).await.unwrap_err();

        assert!(matches!(
            error,
            Error::Config(ConfigError::File(ErrorKind::NotFound))
        ));
    }
}
