//! Data model shared by the login client: the token returned by the login
//! endpoint and the credentials sent to it.
#![allow(missing_docs)]

pub mod credentials;
pub mod token;

pub use credentials::Credentials;
pub use token::Token;

/// Commonly used model types
pub mod prelude {
    pub use crate::credentials::Credentials;
    pub use crate::token::Token;
}
