//! Array index validation for `/number/{id}`.

use super::{run_checks, ValidationError};

/// Smallest accepted index.
pub const MIN_INDEX: i64 = 0;

/// Largest accepted index.
pub const MAX_INDEX: i64 = 6;

const FIELD: &str = "id";

/// An index inside `MIN_INDEX..=MAX_INDEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidIndex(i64);

impl ValidIndex {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

/// Parse a path segment and check it against the index bounds.
///
/// Anything that does not parse as a 64-bit integer is rejected before the
/// range checks run.
pub fn validate_index(raw: &str) -> Result<ValidIndex, ValidationError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ValidationError::new(FIELD, "Index must be an integer"))?;
    run_checks(&value, &[non_negative, within_upper_bound])?;
    Ok(ValidIndex(value))
}

fn non_negative(value: &i64) -> Result<(), ValidationError> {
    if *value < MIN_INDEX {
        return Err(ValidationError::new(FIELD, "Index must be non-negative"));
    }
    Ok(())
}

fn within_upper_bound(value: &i64) -> Result<(), ValidationError> {
    if *value > MAX_INDEX {
        return Err(ValidationError::new(FIELD, "Index must be between 0 and 6"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_index_in_range() {
        for i in MIN_INDEX..=MAX_INDEX {
            assert_eq!(validate_index(&i.to_string()).unwrap().as_i64(), i);
        }
    }

    #[test]
    fn rejects_negative_indices() {
        for raw in ["-1", "-2147483648", "-9223372036854775808"] {
            let err = validate_index(raw).unwrap_err();
            assert_eq!(err.message, "Index must be non-negative");
        }
    }

    #[test]
    fn rejects_indices_past_the_end() {
        for raw in ["7", "999", "2147483647", "9223372036854775807"] {
            let err = validate_index(raw).unwrap_err();
            assert_eq!(err.message, "Index must be between 0 and 6");
        }
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "1.5", "0x1", " 3", "9223372036854775808", "3;drop"] {
            let err = validate_index(raw).unwrap_err();
            assert_eq!(err.message, "Index must be an integer", "{raw:?}");
        }
    }
}
