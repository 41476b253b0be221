//! Request input validation.
//!
//! # Data Flow
//! ```text
//! raw query / path value
//!     → name.rs  (trim, blank, length, whitelist, denylist)
//!     → index.rs (integer parse, lower bound, upper bound)
//!     → ValidName / ValidIndex (only constructible through validation)
//!     → handler
//! ```
//!
//! # Design Decisions
//! - Each rule is a plain function returning `Result<(), ValidationError>`
//! - Rules run in order and the first failure wins
//! - The character whitelist is the security boundary; the token denylist
//!   only backs it up and makes no completeness claim

pub mod index;
pub mod name;

pub use index::{validate_index, ValidIndex};
pub use name::{validate_name, ValidName, DEFAULT_NAME};

use thiserror::Error;

/// A rejected request parameter.
///
/// Renders as `<field>: <message>`, which is what clients see in the
/// `details` field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Parameter name as it appears in the request.
    pub field: &'static str,
    /// Human readable rule description.
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Run `checks` against `value` in order, stopping at the first failure.
pub fn run_checks<T: ?Sized>(
    value: &T,
    checks: &[fn(&T) -> Result<(), ValidationError>],
) -> Result<(), ValidationError> {
    checks.iter().try_for_each(|check| check(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_odd(value: &i64) -> Result<(), ValidationError> {
        if value % 2 != 0 {
            return Err(ValidationError::new("n", "odd"));
        }
        Ok(())
    }

    fn reject_large(value: &i64) -> Result<(), ValidationError> {
        if *value > 10 {
            return Err(ValidationError::new("n", "large"));
        }
        Ok(())
    }

    #[test]
    fn first_failing_check_wins() {
        let err = run_checks(&13, &[reject_odd, reject_large]).unwrap_err();
        assert_eq!(err.message, "odd");

        let err = run_checks(&14, &[reject_odd, reject_large]).unwrap_err();
        assert_eq!(err.message, "large");
    }

    #[test]
    fn empty_pipeline_passes() {
        assert!(run_checks::<i64>(&1, &[]).is_ok());
    }

    #[test]
    fn error_display_is_field_prefixed() {
        let err = ValidationError::new("name", "Name cannot be blank");
        assert_eq!(err.to_string(), "name: Name cannot be blank");
    }
}
