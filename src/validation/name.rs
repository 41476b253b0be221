//! Greeting name validation.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{run_checks, ValidationError};

/// Name used when the request carries no `name` parameter at all.
pub const DEFAULT_NAME: &str = "World";

/// Maximum name length in characters, after trimming.
pub const MAX_NAME_LEN: usize = 100;

const FIELD: &str = "name";

/// Letters, digits, space, hyphen and period.
const NAME_PATTERN: &str = r"^[A-Za-z0-9 \-.]+$";

/// Comment markers that the whitelist alone would let through.
const DENIED_TOKENS: [&str; 3] = ["--", "/*", "*/"];

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)] // Compile-time constant pattern
    Regex::new(NAME_PATTERN).expect("valid name pattern")
});

/// A trimmed name that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName(String);

impl ValidName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim `raw` and run it through the name rules.
pub fn validate_name(raw: &str) -> Result<ValidName, ValidationError> {
    let trimmed = raw.trim();
    run_checks(
        trimmed,
        &[not_blank, within_length, whitelisted, no_denied_tokens],
    )?;
    Ok(ValidName(trimmed.to_string()))
}

fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new(FIELD, "Name cannot be blank"));
    }
    Ok(())
}

fn within_length(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(1..=MAX_NAME_LEN).contains(&len) {
        return Err(ValidationError::new(
            FIELD,
            "Name must be between 1 and 100 characters",
        ));
    }
    Ok(())
}

fn whitelisted(name: &str) -> Result<(), ValidationError> {
    if !NAME_REGEX.is_match(name) {
        return Err(ValidationError::new(
            FIELD,
            "Name must contain only letters, numbers, spaces, hyphens, and periods",
        ));
    }
    Ok(())
}

fn no_denied_tokens(name: &str) -> Result<(), ValidationError> {
    let lower = name.to_lowercase();
    if let Some(token) = DENIED_TOKENS.iter().find(|token| lower.contains(**token)) {
        tracing::warn!(token = %token, "Disallowed token detected in name");
        return Err(ValidationError::new(
            FIELD,
            "Input contains disallowed characters.",
        ));
    }
    Ok(())
}
