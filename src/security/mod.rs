//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (note whether the request is secure)
//!     → handler (input checks live in crate::validation)
//! Outgoing response:
//!     → headers.rs (fixed headers, HSTS when secure)
//! ```
//!
//! # Design Decisions
//! - Defense in depth: validation at the boundary and again at the lookup
//! - Fail closed: reject on any validation failure
//! - No trust in client input

pub mod headers;

pub use headers::{security_headers_middleware, SecureTransport, SecurityHeaders};
