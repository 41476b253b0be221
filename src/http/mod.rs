//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → handlers.rs (validate input, call GreetingService)
//!     → error.rs (map failures to structured 400s)
//!     → security headers appended
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
