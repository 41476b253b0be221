//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, headers, metrics)
//! - Serve over plain TCP or TLS with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Extension, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::greeting::GreetingService;
use crate::http::handlers::{greeting, health, not_found, number};
use crate::http::request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics::track_requests;
use crate::security::{security_headers_middleware, SecureTransport, SecurityHeaders};

/// How long in-flight TLS connections may drain after shutdown is signalled.
const TLS_DRAIN_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub service: Arc<GreetingService>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::new();
        let router = build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Run the server on an already bound listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!(
            responses = self.state.service.responses_issued(),
            "HTTP server stopped"
        );
        Ok(())
    }

    /// Run the server over TLS on the configured bind address.
    ///
    /// Every request served here is marked with [`SecureTransport`], which
    /// turns on Strict-Transport-Security.
    pub async fn run_tls(
        self,
        tls: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .listener
            .bind_address
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        tracing::info!(address = %addr, "HTTPS server starting");

        let app = self.router.layer(Extension(SecureTransport));
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!(
            responses = self.state.service.responses_issued(),
            "HTTPS server stopped"
        );
        Ok(())
    }

    /// Shared handler state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers listed later wrap the ones before them, so the request ID is set
/// first and security headers are applied to every response, including
/// timeouts and 404s.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    let headers = Arc::new(SecurityHeaders::from_config(&config.security));

    Router::new()
        .route("/greeting", get(greeting))
        .route("/number/{id}", get(number))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::from_fn_with_state(headers, security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = request.request_id().unwrap_or("unknown"),
            )
        }))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestId))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn client_request_id_is_preserved() {
        let app = build_router(&ServiceConfig::default(), AppState::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-request-id"], "trace-me");
    }

    #[tokio::test]
    async fn tls_marker_enables_hsts() {
        let app = build_router(&ServiceConfig::default(), AppState::new())
            .layer(Extension(SecureTransport));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers()["strict-transport-security"],
            "max-age=31536000; includeSubDomains; preload"
        );
    }

    #[tokio::test]
    async fn method_not_allowed_still_gets_headers() {
        let app = build_router(&ServiceConfig::default(), AppState::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/greeting")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    }

    #[test]
    fn server_keeps_config() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        let server = HttpServer::new(config);
        assert_eq!(server.config().listener.bind_address, "127.0.0.1:0");
        assert_eq!(server.state().service.responses_issued(), 0);
    }
}
