//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//! - `validation_failures_total` (counter): rejected inputs by field
//!
//! Without an installed recorder every call here is a no-op, so handlers and
//! tests never need to care whether the exporter is running.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus exporter on `addr`. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: String, route: String, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_validation_failure(field: &'static str) {
    metrics::counter!("validation_failures_total", "field" => field).increment(1);
}

/// Middleware recording request count and latency per matched route.
///
/// Unmatched requests share the `unmatched` label so arbitrary paths cannot
/// blow up label cardinality.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_request(method, route, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{self, Method, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn passes_responses_through() {
        let app = Router::new()
            .route("/number/{id}", get(ok_handler))
            .layer(middleware::from_fn(track_requests));

        let request = http::Request::builder()
            .method(Method::GET)
            .uri("/number/3")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_request("GET".into(), "/health".into(), 200, Instant::now());
        record_validation_failure("name");
    }
}
