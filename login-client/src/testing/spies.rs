//! Spies: full, ordered record of how a service was called

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use login_model::{Credentials, Token};
use parking_lot::Mutex;

use super::canned_token;
use crate::error::{LoginError, LoginResult};
use crate::services::LoginService;

/// Records every invocation's arguments in call order.
///
/// With a preset error the spy still counts the call, then fails before
/// recording the arguments.
#[derive(Debug, Default)]
pub struct LoginServiceSpy {
    error: Mutex<Option<LoginError>>,
    login_called: AtomicUsize,
    received_invocations: Mutex<Vec<Credentials>>,
}

impl LoginServiceSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(error: LoginError) -> Self {
        let spy = Self::new();
        spy.set_error(Some(error));
        spy
    }

    /// Preset (or clear) the error returned by subsequent calls.
    pub fn set_error(&self, error: Option<LoginError>) {
        *self.error.lock() = error;
    }

    pub fn error(&self) -> Option<LoginError> {
        self.error.lock().clone()
    }

    pub fn login_called(&self) -> usize {
        self.login_called.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent recorded call.
    pub fn received_arguments(&self) -> Option<Credentials> {
        self.received_invocations.lock().last().cloned()
    }

    pub fn received_invocations(&self) -> Vec<Credentials> {
        self.received_invocations.lock().clone()
    }
}

#[async_trait]
impl LoginService for LoginServiceSpy {
    async fn attempt_login(&self, email: String, password: String) -> LoginResult<Token> {
        self.login_called.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.error() {
            return Err(error);
        }

        self.received_invocations
            .lock()
            .push(Credentials::new(email, password));
        Ok(canned_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::canned_error;

    #[tokio::test]
    async fn records_invocations_in_order() {
        let spy = LoginServiceSpy::new();

        spy.attempt_login("first@a.b".into(), "1".into()).await.unwrap();
        spy.attempt_login("second@a.b".into(), "2".into()).await.unwrap();

        assert_eq!(
            spy.received_invocations(),
            vec![
                Credentials::new("first@a.b", "1"),
                Credentials::new("second@a.b", "2"),
            ]
        );
        assert_eq!(
            spy.received_arguments(),
            Some(Credentials::new("second@a.b", "2"))
        );
    }

    #[tokio::test]
    async fn preset_error_is_returned_without_recording() {
        let spy = LoginServiceSpy::failing_with(canned_error());

        let result = spy.attempt_login("a@b.c".into(), "pw".into()).await;

        assert_eq!(result, Err(canned_error()));
        assert_eq!(spy.login_called(), 1);
        assert!(spy.received_invocations().is_empty());
        assert!(spy.received_arguments().is_none());
    }

    #[tokio::test]
    async fn clearing_error_resumes_recording() {
        let spy = LoginServiceSpy::failing_with(LoginError::decoding());
        let _ = spy.attempt_login("a@b.c".into(), "pw".into()).await;

        spy.set_error(None);
        spy.attempt_login("a@b.c".into(), "pw".into()).await.unwrap();

        assert_eq!(spy.login_called(), 2);
        assert_eq!(spy.received_invocations().len(), 1);
    }
}
