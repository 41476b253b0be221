//! The fixed lookup table behind `/number/{id}`.

use thiserror::Error;

/// Table contents.
pub const ELEMENTS: [i32; 7] = [897, 56, 78, 90, 12, 123, 75];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("index {index} is outside 0..{len}")]
    OutOfRange { index: i64, len: usize },
}

/// Immutable seven-element table.
///
/// `get` performs its own bounds check and never relies on the caller having
/// validated the index.
#[derive(Debug, Clone)]
pub struct FixedArray {
    values: [i32; 7],
}

impl FixedArray {
    pub fn new(values: [i32; 7]) -> Self {
        Self { values }
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, index: i64) -> Result<i32, LookupError> {
        usize::try_from(index)
            .ok()
            .and_then(|slot| self.values.get(slot).copied())
            .ok_or(LookupError::OutOfRange {
                index,
                len: self.values.len(),
            })
    }
}

impl Default for FixedArray {
    fn default() -> Self {
        Self::new(ELEMENTS)
    }
}
