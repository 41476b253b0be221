//! Endpoint handlers.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::greeting::GreetingResponse;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::validation::{validate_index, validate_name, DEFAULT_NAME};

/// Literal body of `GET /health`.
pub const HEALTH_BODY: &str = "OK - Secure Version 1.0.0";

#[derive(Debug, Default, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

/// `GET /greeting?name=<string>`
pub async fn greeting(
    State(state): State<AppState>,
    params: Result<Query<GreetingParams>, QueryRejection>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let Query(params) = params?;
    let raw = params.name.as_deref().unwrap_or(DEFAULT_NAME);
    let name = validate_name(raw)?;
    Ok(Json(state.service.greet(&name)))
}

/// `GET /number/{id}`
pub async fn number(
    State(state): State<AppState>,
    raw: Result<Path<String>, PathRejection>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let Path(raw) = raw?;
    let index = validate_index(&raw)?;
    let response = state.service.element_at(index.as_i64())?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health() -> &'static str {
    HEALTH_BODY
}

/// Fallback for unmatched routes.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
