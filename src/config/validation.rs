//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: ServiceConfig → Result<(), Vec<ConfigValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.tls.{0} must not be empty")]
    EmptyTlsPath(&'static str),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level '{0}' is not a valid filter directive")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("security.hsts_max_age_secs must be greater than zero")]
    ZeroHstsMaxAge,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check every semantic constraint, collecting all failures.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    let listener = &config.listener;
    if listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ConfigValidationError::InvalidBindAddress(
            listener.bind_address.clone(),
        ));
    }
    if let Some(tls) = &listener.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyTlsPath("cert_path"));
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyTlsPath("key_path"));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ConfigValidationError::ZeroRequestTimeout);
    }

    let observability = &config.observability;
    if EnvFilter::try_new(&observability.log_level).is_err() {
        errors.push(ConfigValidationError::InvalidLogLevel(
            observability.log_level.clone(),
        ));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ConfigValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if config.security.hsts_max_age_secs == 0 {
        errors.push(ConfigValidationError::ZeroHstsMaxAge);
    }
    if config.security.max_body_size == 0 {
        errors.push(ConfigValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
