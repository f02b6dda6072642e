//! Mocks: canned answers plus call bookkeeping to assert on afterwards

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use login_model::Token;
use parking_lot::Mutex;

use super::{canned_error, canned_token};
use crate::error::{LoginError, LoginResult};
use crate::services::{LoggerService, LoginService};

/// Counts calls and returns the canned token.
#[derive(Debug, Default)]
pub struct LoginServiceHappyPathMock {
    login_called_count: AtomicUsize,
}

impl LoginServiceHappyPathMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_called_count(&self) -> usize {
        self.login_called_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginService for LoginServiceHappyPathMock {
    async fn attempt_login(&self, _email: String, _password: String) -> LoginResult<Token> {
        self.login_called_count.fetch_add(1, Ordering::SeqCst);
        Ok(canned_token())
    }
}

/// Counts calls, fails with the canned error and keeps the last error it
/// produced.
#[derive(Debug, Default)]
pub struct LoginServiceSadPathMock {
    login_called: AtomicUsize,
    error: Mutex<Option<LoginError>>,
}

impl LoginServiceSadPathMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_called(&self) -> usize {
        self.login_called.load(Ordering::SeqCst)
    }

    pub fn error(&self) -> Option<LoginError> {
        self.error.lock().clone()
    }
}

#[async_trait]
impl LoginService for LoginServiceSadPathMock {
    async fn attempt_login(&self, _email: String, _password: String) -> LoginResult<Token> {
        self.login_called.fetch_add(1, Ordering::SeqCst);
        let error = canned_error();
        *self.error.lock() = Some(error.clone());
        Err(error)
    }
}

/// Counts `log` calls.
#[derive(Debug, Default)]
pub struct LoggerServiceMock {
    log_called_count: AtomicUsize,
}

impl LoggerServiceMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_called_count(&self) -> usize {
        self.log_called_count.load(Ordering::SeqCst)
    }
}

impl LoggerService for LoggerServiceMock {
    fn log(&self, _email: &str) {
        self.log_called_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn happy_mock_counts_every_call() {
        let mock = LoginServiceHappyPathMock::new();

        mock.attempt_login("a".into(), "b".into()).await.unwrap();
        mock.attempt_login("a".into(), "b".into()).await.unwrap();

        assert_eq!(mock.login_called_count(), 2);
    }

    #[tokio::test]
    async fn sad_mock_keeps_error_it_returned() {
        let mock = LoginServiceSadPathMock::new();
        assert!(mock.error().is_none());

        let returned = mock.attempt_login("a".into(), "b".into()).await.unwrap_err();

        assert_eq!(mock.login_called(), 1);
        assert_eq!(mock.error(), Some(returned));
    }

    #[test]
    fn logger_mock_counts_calls() {
        let mock = LoggerServiceMock::new();

        mock.log("hello@gmail.com");

        assert_eq!(mock.log_called_count(), 1);
    }
}
