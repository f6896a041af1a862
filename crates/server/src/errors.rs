use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::notice::Notice;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("bootstrap admin failed: {0}")]
    Bootstrap(#[from] AuthError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

/// Turn a failed service call into the notice shown on the next view.
/// Caller mistakes are warnings; storage faults are logged and shown as danger.
pub fn service_notice(op: &'static str, err: &ServiceError) -> Notice {
    if err.is_user_error() {
        warn!(op, code = err.code(), error = %err, "request rejected");
        Notice::warning(err.to_string())
    } else {
        error!(op, code = err.code(), error = %err, "storage failure");
        Notice::danger(format!("{op} failed: {err}"))
    }
}
