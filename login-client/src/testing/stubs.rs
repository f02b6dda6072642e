//! Stubs: canned answers, no tracking

use async_trait::async_trait;
use login_model::Token;

use super::{canned_error, canned_token};
use crate::error::LoginResult;
use crate::services::LoginService;

/// Always returns the canned token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginServiceHappyPathStub;

#[async_trait]
impl LoginService for LoginServiceHappyPathStub {
    async fn attempt_login(&self, _email: String, _password: String) -> LoginResult<Token> {
        Ok(canned_token())
    }
}

/// Always fails with the canned error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginServiceSadPathStub;

#[async_trait]
impl LoginService for LoginServiceSadPathStub {
    async fn attempt_login(&self, _email: String, _password: String) -> LoginResult<Token> {
        Err(canned_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CANNED_TOKEN_VALUE;

    #[tokio::test]
    async fn happy_stub_ignores_credentials() {
        let stub = LoginServiceHappyPathStub;

        let first = stub.attempt_login("a".into(), "b".into()).await.unwrap();
        let second = stub.attempt_login(String::new(), String::new()).await.unwrap();

        assert_eq!(first.value(), CANNED_TOKEN_VALUE);
        assert_eq!(second.value(), CANNED_TOKEN_VALUE);
        assert!(!first.is_expired());
    }

    #[tokio::test]
    async fn sad_stub_always_fails() {
        let stub = LoginServiceSadPathStub;

        let result = stub.attempt_login("a".into(), "b".into()).await;

        assert_eq!(result, Err(canned_error()));
    }
}
