//! Shared guard functions for mutation operations.
//!
//! Every mutating entry point of `TypedVec` funnels through these checks
//! before touching storage, so enforcement cannot be bypassed by any single
//! operation taking a shortcut. All checks are read-only: a failed check
//! leaves the container untouched.

use crate::error::{ConstraintError, ConstraintResult};
use corral_core::{Kind, KindSet, Value};

/// Check a single element against the resolved kind set.
pub fn check_element(allowed: &KindSet, value: &Value) -> ConstraintResult<()> {
    if allowed.permits(value) {
        Ok(())
    } else {
        Err(ConstraintError::element_type(value.kind(), allowed.clone()))
    }
}

/// Check every element of a batch against the resolved kind set.
///
/// All-or-nothing: the first offending element fails the whole batch and
/// the caller must not have committed any prefix of it.
pub fn check_batch(allowed: &KindSet, items: &[Value]) -> ConstraintResult<()> {
    for (position, value) in items.iter().enumerate() {
        if !allowed.permits(value) {
            return Err(ConstraintError::batch(position, value.kind(), allowed.clone()));
        }
    }
    Ok(())
}

/// Check an initial construction batch against the resolved kind set.
pub fn check_construction(allowed: &KindSet, items: &[Value]) -> ConstraintResult<()> {
    for (position, value) in items.iter().enumerate() {
        if !allowed.permits(value) {
            return Err(ConstraintError::construction(
                position,
                value.kind(),
                allowed.clone(),
            ));
        }
    }
    Ok(())
}

/// Check that a repetition-count argument is a non-negative integer.
///
/// Repetition introduces no new element kinds, so this is the only check
/// the repeat operation needs before delegating.
pub fn check_count(value: &Value) -> ConstraintResult<usize> {
    match value {
        Value::Int(n) if *n >= 0 => Ok(*n as usize),
        Value::Int(_) => Err(ConstraintError::argument_shape(
            "non-negative Int",
            Kind::Int,
        )),
        other => Err(ConstraintError::argument_shape(
            "non-negative Int",
            other.kind(),
        )),
    }
}

/// Check that a multi-element argument has sequence shape, yielding its
/// elements. A scalar where a sequence is expected is an argument-shape
/// violation, not an element-kind violation.
pub fn check_sequence(value: Value) -> ConstraintResult<Vec<Value>> {
    value
        .into_list()
        .map_err(|other| ConstraintError::argument_shape("List", other.kind()))
}
