use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use model::DaoError;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Error returned by every handler; rendered as an `ErrorResponse` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Dao(#[from] DaoError),

    #[error("{0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Dao(DaoError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Dao(DaoError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            ApiError::Dao(DaoError::AuthenticationFailure) => StatusCode::UNAUTHORIZED,
            ApiError::Dao(DaoError::PasswordHash(_) | DaoError::TransactionFailure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Dao(DaoError::NotFound { .. }) => "NOT_FOUND",
            ApiError::Dao(DaoError::ConstraintViolation(_)) => "CONSTRAINT_VIOLATION",
            ApiError::Dao(DaoError::AuthenticationFailure) => "AUTHENTICATION_FAILED",
            ApiError::Dao(DaoError::TransactionFailure(_)) => "DATABASE_ERROR",
            ApiError::Dao(DaoError::PasswordHash(_)) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(DaoError::not_found("Hotel", 1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(DaoError::constraint("dup")).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(DaoError::AuthenticationFailure).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Validation("bad".to_string()).status(), StatusCode::BAD_REQUEST);

        let failure = ApiError::from(DaoError::from(DbErr::Custom("boom".to_string())));
        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_store_failure_renders_server_error() {
        let response = ApiError::from(DaoError::from(DbErr::Custom("disk I/O error".to_string()))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
