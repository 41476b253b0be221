//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → tls.rs (optional TLS handshake, via axum-server)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional; without it, a fronting proxy may declare HTTPS via
//!   X-Forwarded-Proto

pub mod tls;

pub use tls::load_tls_config;
