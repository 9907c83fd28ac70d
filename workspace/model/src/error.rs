use sea_orm::{DbErr, SqlErr};
use std::fmt::Display;
use thiserror::Error;

/// Failure outcomes of the data-access layer.
///
/// Absence on `read` is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum DaoError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Deliberately carries no detail: unknown user and wrong password look the same.
    #[error("invalid username or password")]
    AuthenticationFailure,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("database transaction failed: {0}")]
    TransactionFailure(#[source] DbErr),
}

impl DaoError {
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::ConstraintViolation(message.into())
    }
}

impl From<DbErr> for DaoError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::ConstraintViolation(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::ConstraintViolation(message),
            _ => Self::TransactionFailure(err),
        }
    }
}

/// Returns a `ConstraintViolation` unless `condition` holds.
pub(crate) fn require(condition: bool, message: impl Into<String>) -> Result<(), DaoError> {
    if condition {
        Ok(())
    } else {
        Err(DaoError::constraint(message))
    }
}
