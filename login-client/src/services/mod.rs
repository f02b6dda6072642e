//! Service capabilities injected into the login view-model
//!
//! Each capability is a single-method trait. Production implementations live
//! next to the trait; test doubles live in [`crate::testing`].

pub mod logger;
pub mod login;

pub use logger::{DefaultLoggerService, LoggerService};
pub use login::{DefaultLoginService, LoginService};

#[cfg(test)]
pub use login::MockLoginService;
