//! Client configuration
//!
//! Resolved from the process environment, optionally seeded from a `.env`
//! file first.

use std::path::Path;

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the login endpoint.
pub const LOGIN_URL_ENV: &str = "LOGIN_SERVICE_URL";

/// Endpoint used when [`LOGIN_URL_ENV`] is unset.
pub const DEFAULT_LOGIN_URL: &str = "http://localhost:3000/api/v1/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub login_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_url: Url::parse(DEFAULT_LOGIN_URL).expect("DEFAULT_LOGIN_URL is a valid URL"),
        }
    }
}

impl ClientConfig {
    pub fn new(login_url: Url) -> Self {
        Self { login_url }
    }

    /// Parse and validate a login URL.
    pub fn parse(login_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(login_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: login_url.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self::new(url)),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `path` into the environment (missing file is not an error), then
    /// resolve from the environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let loaded = dotenvy::from_path(path.as_ref())
            .map(|_| true)
            .or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?;

        if !loaded {
            log::debug!(
                "[ClientConfig] No env file at {}, using process environment",
                path.as_ref().display()
            );
        }

        Self::from_environment()
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOGIN_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(value) => Self::parse(&value),
            None => Ok(Self::default()),
        }
    }

    pub fn with_login_url(mut self, login_url: Url) -> Self {
        self.login_url = login_url;
        self
    }
}
