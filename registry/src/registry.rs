//! The Registry - immutable definition lookup.

use crate::{ContainerDef, DefId};
use std::collections::HashMap;

/// The Registry provides runtime lookup of container definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Container definitions by ID.
    defs: HashMap<DefId, ContainerDef>,
    /// Definition ID lookup by name.
    def_names: HashMap<String, DefId>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(defs: HashMap<DefId, ContainerDef>, def_names: HashMap<String, DefId>) -> Self {
        Self { defs, def_names }
    }

    /// Get a definition by ID.
    pub fn get_def(&self, id: DefId) -> Option<&ContainerDef> {
        self.defs.get(&id)
    }

    /// Get a definition by name.
    pub fn get_def_by_name(&self, name: &str) -> Option<&ContainerDef> {
        self.def_names.get(name).and_then(|id| self.defs.get(id))
    }

    /// Get a definition ID by name.
    pub fn get_def_id(&self, name: &str) -> Option<DefId> {
        self.def_names.get(name).copied()
    }

    /// Get all definitions.
    pub fn all_defs(&self) -> impl Iterator<Item = &ContainerDef> {
        self.defs.values()
    }

    /// Get the number of definitions.
    pub fn def_count(&self) -> usize {
        self.defs.len()
    }
}
