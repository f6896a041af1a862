use sea_orm::DbErr;
use thiserror::Error;

/// Why a shop record could not be written.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The record breaks a field rule (rating range, negative amount, blank name).
    #[error("rejected record: {0}")]
    Validation(String),
    /// The store refused or failed the statement, foreign keys and unique keys included.
    #[error("storage failure: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self { ModelError::Db(e.to_string()) }
}
