//! Interface error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use carlot_store::StoreError;

/// Interface error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty.
    #[error("Brand, model, and price are required")]
    MissingFields,

    /// Storage fault. The driver message is surfaced verbatim.
    #[error("{0}")]
    Storage(#[from] StoreError),
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ApiError::MissingFields;
        assert_eq!(err.to_string(), "Brand, model, and price are required");
    }

    #[test]
    fn test_storage_error_passes_message_through() {
        let err = ApiError::Storage(StoreError::Statement("disk I/O error".to_string()));
        assert_eq!(err.to_string(), "disk I/O error");
    }

    #[test]
    fn test_status_mapping() {
        let response = ApiError::MissingFields.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            ApiError::Storage(StoreError::Statement("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
