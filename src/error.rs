//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", out_of_range_message(.id, .max))]
    OutOfRange { id: i64, max: Option<i64> },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

fn out_of_range_message(id: &i64, max: &Option<i64>) -> String {
    match max {
        Some(max) => format!("please provide a valid identifier (between 1 and {})", max),
        None => format!("please provide a valid identifier (1 or greater, got {})", id),
    }
}

impl AppError {
    /// Stable error kind reported in the response envelope and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::BadRequest(_) | AppError::OutOfRange { .. } => "client_input",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Db(_) => "store",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) | AppError::OutOfRange { .. } | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message sent to the client. Store and config details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Db(_) => "internal store error".into(),
            AppError::Config(_) => "server misconfigured".into(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        if status.is_server_error() {
            tracing::error!(kind, status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(kind, status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                kind: kind.to_string(),
                message: self.public_message(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::OutOfRange { id: 9, max: Some(3) }.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_from_store_is_still_a_store_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), "store");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal store error");
    }

    #[test]
    fn out_of_range_names_the_inclusive_bounds() {
        let err = AppError::OutOfRange { id: 0, max: Some(151) };
        assert_eq!(err.to_string(), "please provide a valid identifier (between 1 and 151)");
        let empty = AppError::OutOfRange { id: -2, max: None };
        assert_eq!(empty.to_string(), "please provide a valid identifier (1 or greater, got -2)");
    }
}
