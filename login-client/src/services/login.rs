//! Login service trait and the HTTP implementation

use async_trait::async_trait;
use login_model::{Credentials, Token};
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{LoginError, LoginResult};

/// Exchanges credentials for a [`Token`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Exchange `email`/`password` for a token; fails on transport errors or
    /// an undecodable response body
    async fn attempt_login(&self, email: String, password: String) -> LoginResult<Token>;
}

/// Posts credentials as JSON to the configured login URL and decodes the
/// response body as a token. No retries; the transport's default timeout
/// applies.
#[derive(Debug, Clone)]
pub struct DefaultLoginService {
    client: Client,
    login_url: Url,
}

impl Default for DefaultLoginService {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl DefaultLoginService {
    pub fn new(login_url: Url) -> Self {
        Self::with_client(Client::new(), login_url)
    }

    pub fn with_client(client: Client, login_url: Url) -> Self {
        log::info!("[DefaultLoginService] Using login URL: {}", login_url);
        Self { client, login_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.login_url.clone())
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }
}

#[async_trait]
impl LoginService for DefaultLoginService {
    async fn attempt_login(&self, email: String, password: String) -> LoginResult<Token> {
        let payload = Credentials::new(email, password);
        log::debug!(
            "[DefaultLoginService] POST {} for {}",
            self.login_url,
            payload.email
        );

        let response = self
            .client
            .post(self.login_url.clone())
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice::<Token>(&body).map_err(|err| {
            log::warn!(
                "[DefaultLoginService] Response ({}) is not a token: {}",
                status,
                err
            );
            LoginError::decoding()
        })
    }
}
