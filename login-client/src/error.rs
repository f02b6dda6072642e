//! Error types for the login client
//!
//! The view-model never inspects these; it stores whatever the service
//! returned so the UI can render it.

use thiserror::Error;

/// Result type for login service operations
pub type LoginResult<T> = Result<T, LoginError>;

/// Failure surfaced by a [`LoginService`](crate::services::LoginService).
///
/// `Clone` so that test doubles can hand out the same preset error on every
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The request never produced a response body
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not a token; the decoder's cause is dropped
    #[error("Decoding error (code {code})")]
    Decoding { code: i32 },

    /// Generic domain/code error
    #[error("{domain} error (code {code})")]
    Tagged { domain: String, code: i32 },
}

impl LoginError {
    /// Code used when a login response body cannot be decoded.
    pub const DECODING_CODE: i32 = 1;

    pub fn transport(err: impl std::fmt::Display) -> Self {
        LoginError::Transport(err.to_string())
    }

    pub fn decoding() -> Self {
        LoginError::Decoding {
            code: Self::DECODING_CODE,
        }
    }

    pub fn tagged(domain: impl Into<String>, code: i32) -> Self {
        LoginError::Tagged {
            domain: domain.into(),
            code,
        }
    }
}

impl From<reqwest::Error> for LoginError {
    fn from(err: reqwest::Error) -> Self {
        LoginError::transport(err)
    }
}

/// Errors raised when talking to a [`UiThread`](crate::ui::UiThread)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiThreadError {
    #[error("UI thread is no longer running")]
    Closed,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid login URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Login URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
