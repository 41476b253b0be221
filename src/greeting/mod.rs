//! Greeting domain.
//!
//! # Data Flow
//! ```text
//! ValidName  → service.rs (greet)      → GreetingResponse
//! ValidIndex → service.rs (element_at) → numbers.rs (bounds-checked get)
//!                                      → GreetingResponse | ServiceError
//!
//! Both paths draw their id from counter.rs.
//! ```

pub mod counter;
pub mod numbers;
pub mod service;

pub use counter::ResponseCounter;
pub use numbers::{FixedArray, LookupError};
pub use service::{GreetingResponse, GreetingService, ServiceError, INVALID_INDEX_MESSAGE};
