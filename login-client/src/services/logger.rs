//! Audit hook for successful logins

use chrono::Utc;

/// Records that `email` logged in.
#[cfg_attr(test, mockall::automock)]
pub trait LoggerService: Send + Sync {
    fn log(&self, email: &str);
}

/// Writes the login line through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLoggerService;

impl DefaultLoggerService {
    pub(crate) fn line(email: &str) -> String {
        format!(
            "{} logged at {}",
            email,
            Utc::now().format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl LoggerService for DefaultLoggerService {
    fn log(&self, email: &str) {
        log::info!("{}", Self::line(email));
    }
}
