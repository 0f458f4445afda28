//! Compatibility registration for foreign sequence types.
//!
//! Some host types should be treated as satisfying the container contract
//! without implementing the `Constrained` trait and without exposing a kind
//! set at all. Rather than hardcoding an allow-list, recognition goes
//! through this explicit, inspectable table: callers register the foreign
//! types they want recognized and the broad compatibility check consults
//! the table at runtime.
//!
//! The narrow structural probe (`conforms!` in corral-container) never
//! consults this table; a registered foreign type is compatible but does
//! not conform.

use std::any::TypeId;
use std::collections::HashMap;

/// Explicit registration table of foreign types recognized as compatible.
///
/// The table starts empty; nothing is pre-registered.
#[derive(Debug, Default)]
pub struct CompatRegistry {
    entries: HashMap<TypeId, &'static str>,
}

impl CompatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a foreign type as compatible.
    /// Returns true if the type was not already registered.
    pub fn register<T: 'static>(&mut self) -> bool {
        self.entries
            .insert(TypeId::of::<T>(), std::any::type_name::<T>())
            .is_none()
    }

    /// Remove a foreign type from the table.
    /// Returns true if the type was registered.
    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.entries.remove(&TypeId::of::<T>()).is_some()
    }

    /// Check whether a type is registered.
    pub fn recognizes<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Check whether a value's concrete type is registered.
    pub fn recognizes_value<T: 'static>(&self, _value: &T) -> bool {
        self.recognizes::<T>()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the registered types (unspecified order), for inspection.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().copied()
    }
}
