use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_core::CatalogError;
use serde_json::{Value, json};
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Status and JSON body. A 404 carries `{"message": ...}`, every other
    /// status a bare JSON string.
    pub fn status_and_body(&self) -> (StatusCode, Value) {
        let body = if self.status == StatusCode::NOT_FOUND {
            json!({ "message": self.message })
        } else {
            Value::String(self.message.clone())
        };
        (self.status, body)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::BadRequest(reason) => Self::bad_request(reason),
            CatalogError::NotFound(message) => Self::not_found(message),
            CatalogError::Conflict(message) => Self::conflict(message),
            CatalogError::Internal(detail) => {
                tracing::error!(error = %detail, "catalog storage failure");
                Self::internal(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_distinct_statuses() {
        let cases = [
            (
                CatalogError::BadRequest("invalid year".into()),
                StatusCode::BAD_REQUEST,
                json!("invalid year"),
            ),
            (
                CatalogError::NotFound("not found".into()),
                StatusCode::NOT_FOUND,
                json!({ "message": "not found" }),
            ),
            (
                CatalogError::Conflict("movie already exists".into()),
                StatusCode::CONFLICT,
                json!("movie already exists"),
            ),
            (
                CatalogError::Internal("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                json!("connection reset"),
            ),
        ];

        for (err, status, body) in cases {
            let app_error = AppError::from(err);
            assert_eq!(app_error.status_and_body(), (status, body));
        }
    }

    #[test]
    fn into_response_uses_mapped_status() {
        let response = AppError::conflict("movie already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
