//! Corral Container
//!
//! The constrained container: an ordered, mutable sequence that permits
//! only elements whose runtime kind belongs to its resolved allowed-kind
//! set. The set is resolved once at construction (explicit argument over
//! class-level declaration over inference from the initial batch) and every
//! mutating operation passes through the same guard before touching
//! storage.
//!
//! # Module Structure
//!
//! - `vec` - The `TypedVec` container and constraint resolution
//! - `guard` - Shared guard functions consulted by every mutator
//! - `marker` - The `Constrained` capability trait and `conforms!` probe
//! - `error` - Constraint violation error types

mod error;
mod guard;
pub mod marker;
mod vec;

pub use error::{ConstraintError, ConstraintResult};
pub use marker::Constrained;
pub use vec::TypedVec;
