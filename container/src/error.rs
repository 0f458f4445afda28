//! Constraint violation error types.

use corral_core::{Kind, KindSet};
use thiserror::Error;

/// Result type for constrained container operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur when a container operation violates its resolved
/// allowed-kind set. The four violation kinds are distinguishable so callers
/// can assert on exactly what went wrong; none are ever collapsed, swallowed
/// or retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("Element kind {actual} not permitted; allowed kinds: {allowed}")]
    ElementType { actual: Kind, allowed: KindSet },

    #[error("Batch element at position {position} has kind {actual}; allowed kinds: {allowed}")]
    Batch {
        position: usize,
        actual: Kind,
        allowed: KindSet,
    },

    #[error("Invalid argument shape: expected {expected}, got {actual}")]
    ArgumentShape { expected: &'static str, actual: Kind },

    #[error("Initial element at position {position} has kind {actual}; allowed kinds: {allowed}")]
    Construction {
        position: usize,
        actual: Kind,
        allowed: KindSet,
    },

    #[error("Index {index} out of bounds for container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ConstraintError {
    pub fn element_type(actual: Kind, allowed: KindSet) -> Self {
        Self::ElementType { actual, allowed }
    }

    pub fn batch(position: usize, actual: Kind, allowed: KindSet) -> Self {
        Self::Batch {
            position,
            actual,
            allowed,
        }
    }

    pub fn argument_shape(expected: &'static str, actual: Kind) -> Self {
        Self::ArgumentShape { expected, actual }
    }

    pub fn construction(position: usize, actual: Kind, allowed: KindSet) -> Self {
        Self::Construction {
            position,
            actual,
            allowed,
        }
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Returns true if this is an element-kind mismatch (single element,
    /// batch, or construction) as opposed to an argument-shape mismatch.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(
            self,
            Self::ElementType { .. } | Self::Batch { .. } | Self::Construction { .. }
        )
    }
}
