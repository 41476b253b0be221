//! Mapping of request failures to HTTP responses.
//!
//! Every rejection leaves as a 400 with a JSON body. Nothing here ever
//! includes internal error chains in the response.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::greeting::{GreetingResponse, ServiceError, INVALID_INDEX_MESSAGE};
use crate::observability::metrics;
use crate::validation::ValidationError;

/// Value of the `error` field for every validation failure.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Structured 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl ErrorBody {
    pub fn validation(details: impl Into<String>) -> Self {
        Self {
            error: VALIDATION_FAILED.to_string(),
            details: details.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("malformed path: {0}")]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                metrics::record_validation_failure(err.field);
                tracing::warn!(details = %err, "Validation failed");
                validation_failed(err.to_string())
            }
            ApiError::Query(rejection) => {
                metrics::record_validation_failure("query");
                tracing::warn!(details = %rejection, "Malformed query string");
                validation_failed(rejection.body_text())
            }
            ApiError::Path(rejection) => {
                metrics::record_validation_failure("path");
                tracing::warn!(details = %rejection, "Malformed path parameter");
                validation_failed(rejection.body_text())
            }
            ApiError::Service(ServiceError::IndexRejected { id, .. }) => (
                StatusCode::BAD_REQUEST,
                Json(GreetingResponse::new(id, INVALID_INDEX_MESSAGE)),
            )
                .into_response(),
        }
    }
}

fn validation_failed(details: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::validation(details))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_becomes_structured_400() {
        let err = ApiError::from(ValidationError::new("name", "Name cannot be blank"));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body: ErrorBody = body_json(response).await;
        assert_eq!(
            body,
            ErrorBody {
                error: "Validation failed".into(),
                details: "name: Name cannot be blank".into(),
            }
        );
    }

    #[tokio::test]
    async fn rejected_lookup_keeps_its_id_and_hides_details() {
        let err = ApiError::from(ServiceError::IndexRejected { id: 42, index: 9 });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: GreetingResponse = body_json(response).await;
        assert_eq!(body.id, 42);
        assert_eq!(body.content, INVALID_INDEX_MESSAGE);
        assert!(!body.content.contains('9'));
    }
}
