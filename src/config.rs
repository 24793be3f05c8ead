use crate::context::Context;
use crate::error::ProbeError;
use crate::postgres::Postgres;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The environment variable named by `password_env` is not set
    #[error("Environment variable {name} not found")]
    MissingPasswordEnv {
        /// Variable name
        name: String,
    },

    /// The URL cannot carry credentials
    #[error("Cannot set password on URL: {url}")]
    PasswordNotSupported {
        /// The offending URL, without credentials
        url: String,
    },

    /// A zero timeout would expire before the first attempt
    #[error("timeout_secs must be greater than zero")]
    InvalidTimeout,
}

/// Probe target loaded from TOML
///
/// ```toml
/// url = "postgres://app@db:5432/app"
/// password_env = "APP_DB_PASSWORD"
/// timeout_secs = 5
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    /// Target connection URL
    pub url: Url,
    /// Environment variable containing the password
    #[serde(default)]
    pub password_env: Option<String>,
    /// Deadline for a single probe, in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        if config.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(config)
    }

    /// The probe timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// URL with the password filled in from `password_env`
    ///
    /// A password already present in the URL wins over the environment.
    pub fn resolved_url(&self) -> Result<Url, ConfigError> {
        let Some(name) = self.password_env.as_deref() else {
            return Ok(self.url.clone());
        };
        if self.url.password().is_some() {
            debug!("URL already carries a password, ignoring {}", name);
            return Ok(self.url.clone());
        }

        debug!("Reading password from environment variable: {}", name);
        let password = env::var(name).map_err(|_| ConfigError::MissingPasswordEnv {
            name: name.to_string(),
        })?;

        let mut url = self.url.clone();
        url.set_password(Some(&password))
            .map_err(|()| ConfigError::PasswordNotSupported {
                url: self.url.to_string(),
            })?;
        Ok(url)
    }

    /// Context bounded by the configured timeout, or a background context
    #[must_use]
    pub fn context(&self) -> Context {
        match self.timeout() {
            Some(timeout) => Context::background().with_timeout(timeout),
            None => Context::background(),
        }
    }

    /// Build the probe described by this configuration
    pub fn into_resource(self) -> Result<Postgres, ProbeError> {
        let url = self.resolved_url()?;
        Postgres::new(Some(url))
    }
}
