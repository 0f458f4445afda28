//! The constrained container.

use crate::error::ConstraintResult;
use crate::guard;
use crate::marker::Constrained;
use corral_core::{KindSet, Value};
use corral_registry::{ContainerDef, Declared};
use std::fmt;

/// An ordered, mutable sequence restricted to elements whose runtime kind
/// belongs to its resolved allowed-kind set.
///
/// The set is resolved once, at construction, with the precedence:
/// explicit constructor argument, then a concrete class-level declaration
/// from a [`ContainerDef`], then inference from the initial batch. After
/// that it is immutable for the lifetime of the container; every mutating
/// operation checks incoming elements against it and rejects violations
/// atomically, leaving the container unchanged.
///
/// A container constructed from an empty batch with no explicit or
/// class-level constraints resolves to the empty set and rejects every
/// later insertion. This is a deliberate, documented behavior rather than
/// a silently permissive one.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedVec {
    /// Element storage, in insertion order.
    items: Vec<Value>,
    /// The resolved allowed-kind set.
    constraints: KindSet,
}

impl TypedVec {
    /// Construct a container, inferring the allowed kinds from the initial
    /// batch: the distinct runtime kinds observed, duplicates collapsed.
    pub fn new(items: Vec<Value>) -> ConstraintResult<Self> {
        Self::construct(None, None, items)
    }

    /// Construct a container with an explicit allowed-kind set. The batch
    /// is validated against it; inference does not apply.
    pub fn with_constraints(items: Vec<Value>, constraints: KindSet) -> ConstraintResult<Self> {
        Self::construct(None, Some(constraints), items)
    }

    /// Construct an instance of a defined container type. A concrete
    /// class-level declaration fixes the allowed kinds; an open definition
    /// falls back to inference from the batch.
    pub fn from_def(def: &ContainerDef, items: Vec<Value>) -> ConstraintResult<Self> {
        Self::construct(Some(&def.declared), None, items)
    }

    /// Construct an instance of a defined container type with an explicit
    /// allowed-kind set, which overrides the class-level declaration.
    pub fn from_def_with_constraints(
        def: &ContainerDef,
        items: Vec<Value>,
        constraints: KindSet,
    ) -> ConstraintResult<Self> {
        Self::construct(Some(&def.declared), Some(constraints), items)
    }

    /// The single construction funnel: resolve the effective kind set, then
    /// validate the whole batch before any container value exists.
    fn construct(
        declared: Option<&Declared>,
        explicit: Option<KindSet>,
        items: Vec<Value>,
    ) -> ConstraintResult<Self> {
        let constraints = resolve(declared, explicit, &items);
        guard::check_construction(&constraints, &items)?;
        Ok(Self { items, constraints })
    }

    // ==================== Introspection ====================

    /// The resolved allowed-kind set of this container.
    pub fn constraints(&self) -> &KindSet {
        &self.constraints
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at an index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterate over the stored elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// The stored elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    // ==================== Guarded mutations ====================

    /// Append a single element.
    pub fn push(&mut self, value: Value) -> ConstraintResult<()> {
        guard::check_element(&self.constraints, &value)?;
        self.items.push(value);
        Ok(())
    }

    /// Insert an element at an index (existing elements shift right).
    pub fn insert(&mut self, index: usize, value: Value) -> ConstraintResult<()> {
        if index > self.items.len() {
            return Err(crate::ConstraintError::index_out_of_bounds(
                index,
                self.items.len(),
            ));
        }
        guard::check_element(&self.constraints, &value)?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the element at an index.
    pub fn set(&mut self, index: usize, value: Value) -> ConstraintResult<()> {
        if index >= self.items.len() {
            return Err(crate::ConstraintError::index_out_of_bounds(
                index,
                self.items.len(),
            ));
        }
        guard::check_element(&self.constraints, &value)?;
        self.items[index] = value;
        Ok(())
    }

    /// Append a batch of elements. The whole batch is validated before any
    /// element is committed; a mixed batch is rejected without a prefix
    /// being applied.
    pub fn extend(&mut self, items: Vec<Value>) -> ConstraintResult<()> {
        guard::check_batch(&self.constraints, &items)?;
        self.items.extend(items);
        Ok(())
    }

    /// In-place concatenation: the argument must be a `List` value (an
    /// argument-shape violation otherwise), whose elements are then
    /// validated and appended atomically.
    pub fn concat_in_place(&mut self, other: Value) -> ConstraintResult<()> {
        let items = guard::check_sequence(other)?;
        self.extend(items)
    }

    /// In-place repetition: the container becomes `count` copies of itself.
    /// The count must be a non-negative `Int` value; no new element kinds
    /// are introduced, so no membership check is needed. A count of zero
    /// empties the container.
    pub fn repeat_in_place(&mut self, count: Value) -> ConstraintResult<()> {
        let count = guard::check_count(&count)?;
        match count {
            0 => self.items.clear(),
            1 => {}
            _ => {
                let base = self.items.clone();
                for _ in 1..count {
                    self.items.extend(base.iter().cloned());
                }
            }
        }
        Ok(())
    }
}

/// Resolve the effective kind set for a new instance.
///
/// Precedence, highest first: the explicit constructor argument, then a
/// concrete (non-open) class-level declaration, then inference from the
/// batch. The open placeholder never becomes an instance's set.
fn resolve(declared: Option<&Declared>, explicit: Option<KindSet>, items: &[Value]) -> KindSet {
    if let Some(constraints) = explicit {
        return constraints;
    }
    if let Some(Declared::Fixed(constraints)) = declared {
        return constraints.clone();
    }
    KindSet::infer(items)
}

impl Constrained for TypedVec {
    fn constraints(&self) -> &KindSet {
        TypedVec::constraints(self)
    }
}

impl fmt::Display for TypedVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a TypedVec {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::ops::Index<usize> for TypedVec {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}
