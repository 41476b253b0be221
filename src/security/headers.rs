//! Security response headers.
//!
//! # Responsibilities
//! - Add the fixed browser-protection headers to every response
//! - Add Strict-Transport-Security when the request arrived securely
//!
//! # Design Decisions
//! - Secure means: served by the TLS listener, an `https` request URI, or a
//!   trusted `X-Forwarded-Proto: https` from a terminating proxy
//! - Headers overwrite anything a handler set, so no route can weaken them
//! - CSRF and CORS handling are deliberately absent; the service exposes
//!   only idempotent GETs with no ambient credentials

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, uri::Scheme, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::config::SecurityConfig;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data: https:; \
    font-src 'self'; \
    connect-src 'self'; \
    frame-ancestors 'none'; \
    form-action 'self'; \
    base-uri 'self'";

pub const PERMISSIONS_POLICY: &str = "camera=(), microphone=(), geolocation=()";

pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

const DEFAULT_HSTS: &str = "max-age=31536000; includeSubDomains; preload";

const PERMISSIONS_POLICY_HEADER: &str = "permissions-policy";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Request extension marking a connection that was TLS-terminated by this
/// process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureTransport;

/// The header policy applied to every response.
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    fixed: Vec<(HeaderName, HeaderValue)>,
    hsts: HeaderValue,
    trust_forwarded_proto: bool,
}

impl SecurityHeaders {
    pub fn from_config(config: &SecurityConfig) -> Self {
        let fixed = vec![
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
            (header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
            (
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static(CONTENT_SECURITY_POLICY),
            ),
            (header::REFERRER_POLICY, HeaderValue::from_static(REFERRER_POLICY)),
            (
                HeaderName::from_static(PERMISSIONS_POLICY_HEADER),
                HeaderValue::from_static(PERMISSIONS_POLICY),
            ),
        ];

        let hsts = format!(
            "max-age={}; includeSubDomains; preload",
            config.hsts_max_age_secs
        );
        let hsts = HeaderValue::from_str(&hsts)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_HSTS));

        Self {
            fixed,
            hsts,
            trust_forwarded_proto: config.trust_forwarded_proto,
        }
    }

    /// Whether `request` arrived over a secure channel.
    pub fn is_secure<B>(&self, request: &axum::http::Request<B>) -> bool {
        if request.extensions().get::<SecureTransport>().is_some() {
            return true;
        }
        if request.uri().scheme() == Some(&Scheme::HTTPS) {
            return true;
        }
        self.trust_forwarded_proto && forwarded_https(request.headers())
    }

    /// Write the policy into `headers`, replacing existing values.
    pub fn apply(&self, headers: &mut HeaderMap, secure: bool) {
        for (name, value) in &self.fixed {
            headers.insert(name.clone(), value.clone());
        }
        if secure {
            headers.insert(header::STRICT_TRANSPORT_SECURITY, self.hsts.clone());
        }
    }
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self::from_config(&SecurityConfig::default())
    }
}

/// The first hop of `X-Forwarded-Proto` is `https`, case-insensitively.
fn forwarded_https(headers: &HeaderMap) -> bool {
    headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

/// Middleware applying [`SecurityHeaders`] to every response.
pub async fn security_headers_middleware(
    State(policy): State<Arc<SecurityHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    let secure = policy.is_secure(&request);
    let mut response = next.run(request).await;
    policy.apply(response.headers_mut(), secure);
    response
}
