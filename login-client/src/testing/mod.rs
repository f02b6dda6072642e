//! Test doubles for the login services
//!
//! Each double is its own type implementing the service trait; they differ
//! only in bookkeeping:
//!
//! - **Stubs** return a canned token or a canned failure and track nothing.
//! - **Mocks** count calls (and keep the error they produced) so a test can
//!   assert on them afterwards.
//! - **Spies** keep the ordered history of every call's arguments.
//!
//! Doubles use interior mutability, so a test keeps an `Arc` to the double,
//! injects a clone into the view-model and inspects its own handle later.
//!
//! ```rust
//! use std::sync::Arc;
//! use login_client::prelude::*;
//! use login_client::testing::LoginServiceSpy;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let spy = Arc::new(LoginServiceSpy::new());
//! let mut sut = LoginViewModel::new(spy.clone());
//! sut.set_credentials("hello@gmail.com", "password");
//!
//! sut.login().await;
//!
//! assert_eq!(spy.login_called(), 1);
//! assert_eq!(spy.received_arguments().unwrap().email, "hello@gmail.com");
//! # }
//! ```

pub mod mocks;
pub mod spies;
pub mod stubs;

pub use mocks::{LoggerServiceMock, LoginServiceHappyPathMock, LoginServiceSadPathMock};
pub use spies::LoginServiceSpy;
pub use stubs::{LoginServiceHappyPathStub, LoginServiceSadPathStub};

use chrono::Duration;
use login_model::Token;

use crate::error::LoginError;

/// Token value handed out by the happy-path doubles.
pub const CANNED_TOKEN_VALUE: &str = "jwt-token";

/// Canned token: [`CANNED_TOKEN_VALUE`], expiring 30 minutes from now.
pub fn canned_token() -> Token {
    Token::expiring_in(CANNED_TOKEN_VALUE, Duration::minutes(30))
}

/// Generic failure returned by the sad-path doubles.
pub fn canned_error() -> LoginError {
    LoginError::tagged("error", 0)
}
