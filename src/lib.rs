//! Hardened greeting service library.

pub mod config;
pub mod greeting;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;
pub mod validation;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
