//! # Login Client
//!
//! A login view-model whose only collaborator, the [`LoginService`], is
//! injected at construction. Production code talks HTTP through
//! [`DefaultLoginService`]; tests swap in the stubs, mocks and spies from
//! [`testing`].
//!
//! ## Overview
//!
//! - [`LoginViewModel`] holds the form credentials plus the latest token or
//!   error, and exposes a single async [`login`](LoginViewModel::login).
//! - [`UiThread`] is a single-threaded context that owns a view-model; its
//!   `login` reads credentials and commits the outcome on that thread while
//!   the network call is awaited elsewhere.
//! - [`ClientConfig`] resolves the login endpoint from the environment.
//!
//! [`LoginService`]: services::LoginService
//! [`DefaultLoginService`]: services::DefaultLoginService
//! [`LoginViewModel`]: view_model::LoginViewModel
//! [`UiThread`]: ui::UiThread
//! [`ClientConfig`]: config::ClientConfig
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod services;
pub mod testing;
pub mod ui;
pub mod view_model;

pub use login_model::{Credentials, Token};

/// Commonly used types
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::error::{ConfigError, LoginError, LoginResult, UiThreadError};
    pub use crate::services::{
        DefaultLoggerService, DefaultLoginService, LoggerService, LoginService,
    };
    pub use crate::ui::UiThread;
    pub use crate::view_model::{LoginOutcome, LoginRequest, LoginViewModel};
    pub use login_model::{Credentials, Token};
}
