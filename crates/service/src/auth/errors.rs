use thiserror::Error;

use models::errors::ModelError;

/// Failures raised while signing in, checking tokens or provisioning accounts.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid account details: {0}")]
    InvalidAccount(String),
    #[error("username is already taken")]
    UsernameTaken,
    #[error("invalid username or password")]
    BadCredentials,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("auth token rejected: {0}")]
    Token(String),
    #[error("user store unavailable: {0}")]
    Storage(String),
}

impl AuthError {
    /// Stable numeric code for logs.
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidAccount(_) => 1001,
            AuthError::UsernameTaken => 1002,
            AuthError::BadCredentials => 1004,
            AuthError::Hashing(_) => 1101,
            AuthError::Token(_) => 1102,
            AuthError::Storage(_) => 1200,
        }
    }

    /// Caused by what the caller sent rather than by the server.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AuthError::InvalidAccount(_) | AuthError::UsernameTaken | AuthError::BadCredentials | AuthError::Token(_))
    }
}

impl From<ModelError> for AuthError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => AuthError::InvalidAccount(m),
            ModelError::Db(m) => AuthError::Storage(m),
        }
    }
}
