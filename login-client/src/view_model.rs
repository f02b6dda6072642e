//! ViewModel for the login form

use std::fmt;
use std::sync::Arc;

use login_model::{Credentials, Token};

use crate::error::{LoginError, LoginResult, UiThreadError};
use crate::services::{DefaultLoggerService, DefaultLoginService, LoggerService, LoginService};
use crate::ui::UiThread;

/// Result of one login attempt
pub type LoginOutcome = LoginResult<Token>;

/// A login attempt detached from the view-model.
///
/// Carries a snapshot of the credentials and a handle to the service, so it
/// can be awaited away from the thread that owns the view-model.
#[must_use = "a login request does nothing until sent"]
pub struct LoginRequest {
    service: Arc<dyn LoginService>,
    credentials: Credentials,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl LoginRequest {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Call the service exactly once.
    pub async fn send(self) -> LoginOutcome {
        let Credentials { email, password } = self.credentials;
        self.service.attempt_login(email, password).await
    }
}

/// UI-facing login state.
///
/// `email` and `password` are bound to the form. After [`login`](Self::login)
/// completes, either `token` or `error` holds the latest outcome; the other
/// field keeps whatever it held before.
pub struct LoginViewModel {
    pub email: String,
    pub password: String,
    token: Option<Token>,
    error: Option<LoginError>,
    login_service: Arc<dyn LoginService>,
    logger_service: Arc<dyn LoggerService>,
}

impl fmt::Debug for LoginViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginViewModel")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("token", &self.token)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new(Arc::new(DefaultLoginService::default()))
    }
}

impl LoginViewModel {
    pub fn new(login_service: Arc<dyn LoginService>) -> Self {
        Self::with_services(login_service, Arc::new(DefaultLoggerService))
    }

    pub fn with_services(
        login_service: Arc<dyn LoginService>,
        logger_service: Arc<dyn LoggerService>,
    ) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            token: None,
            error: None,
            login_service,
            logger_service,
        }
    }

    pub fn set_credentials(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.email = email.into();
        self.password = password.into();
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    pub fn login_service(&self) -> &Arc<dyn LoginService> {
        &self.login_service
    }

    /// Audit hook. `login` does not call it.
    pub fn logger_service(&self) -> &Arc<dyn LoggerService> {
        &self.logger_service
    }

    /// Snapshot the current credentials into a request.
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            service: Arc::clone(&self.login_service),
            credentials: Credentials::new(self.email.clone(), self.password.clone()),
        }
    }

    /// Commit an outcome. Writes exactly one of `token` or `error`.
    pub fn apply(&mut self, outcome: LoginOutcome) {
        match outcome {
            Ok(token) => self.token = Some(token),
            Err(err) => self.error = Some(err),
        }
    }

    pub async fn login(&mut self) {
        let outcome = self.login_request().send().await;
        self.apply(outcome);
    }
}

impl UiThread<LoginViewModel> {
    /// Log in with the credentials currently on the UI thread.
    ///
    /// Credentials are read and the outcome applied on the UI thread; the
    /// service call itself is awaited on the caller's task. Logins
    /// dispatched concurrently against one view-model land in completion
    /// order.
    pub async fn login(&self) -> Result<(), UiThreadError> {
        let request = self.read(LoginViewModel::login_request).await?;
        let outcome = request.send().await;
        self.update(move |view_model| view_model.apply(outcome))
            .await
    }
}
