//! Greeting and number lookup business logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::greeting::counter::ResponseCounter;
use crate::greeting::numbers::FixedArray;
use crate::validation::ValidName;

/// Client-facing message when the lookup itself refuses an index.
pub const INVALID_INDEX_MESSAGE: &str =
    "Invalid index requested. Please use a value between 0 and 6.";

/// Body returned by both handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub id: u64,
    pub content: String,
}

impl GreetingResponse {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The table refused the index. The id was still consumed.
    #[error("index {index} rejected by lookup (response {id})")]
    IndexRejected { id: u64, index: i64 },
}

/// Handler-facing service. One instance per server, shared via `Arc`.
#[derive(Debug, Default)]
pub struct GreetingService {
    counter: ResponseCounter,
    numbers: FixedArray,
}

impl GreetingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(numbers: FixedArray) -> Self {
        Self {
            counter: ResponseCounter::new(),
            numbers,
        }
    }

    pub fn greet(&self, name: &ValidName) -> GreetingResponse {
        let id = self.counter.next_id();
        tracing::info!(id, name = %name, "Greeting issued");
        GreetingResponse::new(id, format!("Hello, {}!", name))
    }

    /// Look up `index`, re-checking bounds regardless of upstream validation.
    pub fn element_at(&self, index: i64) -> Result<GreetingResponse, ServiceError> {
        let id = self.counter.next_id();
        match self.numbers.get(index) {
            Ok(value) => {
                tracing::info!(id, index, value, "Number lookup succeeded");
                Ok(GreetingResponse::new(
                    id,
                    format!("Element at index {} is: {}", index, value),
                ))
            }
            Err(e) => {
                tracing::warn!(id, index, error = %e, "Invalid array index attempted");
                Err(ServiceError::IndexRejected { id, index })
            }
        }
    }

    /// Number of ids handed out so far.
    pub fn responses_issued(&self) -> u64 {
        self.counter.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting::numbers::ELEMENTS;
    use crate::validation::validate_name;

    #[test]
    fn greets_validated_name() {
        let service = GreetingService::new();
        let name = validate_name("  Ada ").unwrap();
        let response = service.greet(&name);
        assert_eq!(response, GreetingResponse::new(1, "Hello, Ada!"));
    }

    #[test]
    fn formats_number_lookup() {
        let service = GreetingService::new();
        for (i, value) in ELEMENTS.iter().enumerate() {
            let response = service.element_at(i as i64).unwrap();
            assert_eq!(response.content, format!("Element at index {i} is: {value}"));
        }
    }

    #[test]
    fn lookup_rejects_even_when_validation_is_bypassed() {
        let service = GreetingService::new();
        assert_eq!(
            service.element_at(7),
            Err(ServiceError::IndexRejected { id: 1, index: 7 })
        );
        assert_eq!(
            service.element_at(-1),
            Err(ServiceError::IndexRejected { id: 2, index: -1 })
        );
    }

    #[test]
    fn ids_are_shared_across_operations() {
        let service = GreetingService::new();
        let name = validate_name("Grace").unwrap();

        let first = service.greet(&name).id;
        let second = service.element_at(0).unwrap().id;
        let third = match service.element_at(100) {
            Err(ServiceError::IndexRejected { id, .. }) => id,
            Ok(_) => panic!("index 100 must be rejected"),
        };
        let fourth = service.greet(&name).id;

        assert_eq!([first, second, third, fourth], [1, 2, 3, 4]);
        assert_eq!(service.responses_issued(), 4);
    }

    #[test]
    fn custom_table_is_used() {
        let service = GreetingService::with_numbers(FixedArray::new([1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(service.element_at(6).unwrap().content, "Element at index 6 is: 7");
    }
}
