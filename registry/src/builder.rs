//! RegistryBuilder for constructing an immutable Registry.

use crate::{ContainerDef, Declared, DefId, Registry};
use corral_core::{Kind, KindSet};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate definition name: {0}")]
    DuplicateDefName(String),

    #[error("Definition {0} declares an empty constraint set")]
    EmptyConstraints(String),

    #[error("Unknown definition: {0}")]
    UnknownDef(String),
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next definition ID to allocate.
    next_def_id: u32,
    /// Definitions being built.
    defs: HashMap<DefId, ContainerDef>,
    /// Definition name to ID mapping.
    def_names: HashMap<String, DefId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a container definition. The returned builder commits the
    /// definition with `done()`.
    pub fn define(&mut self, name: impl Into<String>) -> DefBuilder<'_> {
        let name = name.into();
        let id = DefId::new(self.next_def_id);
        self.next_def_id += 1;

        DefBuilder {
            builder: self,
            id,
            name,
            declared: Declared::Open,
        }
    }

    /// Finalize the registry.
    pub fn build(self) -> RegistryResult<Registry> {
        Ok(Registry::new(self.defs, self.def_names))
    }

    fn commit(&mut self, def: ContainerDef) -> RegistryResult<DefId> {
        if self.def_names.contains_key(&def.name) {
            return Err(RegistryError::DuplicateDefName(def.name));
        }
        if let Some(kinds) = def.fixed_constraints() {
            if kinds.is_empty() {
                return Err(RegistryError::EmptyConstraints(def.name));
            }
        }

        let id = def.id;
        self.def_names.insert(def.name.clone(), id);
        self.defs.insert(id, def);
        Ok(id)
    }
}

/// Builder for a single container definition.
///
/// Constraint resolution at definition time: an explicit `constraints` set
/// wins outright; otherwise a single `element` kind becomes the sole allowed
/// kind; if neither is supplied, the definition stays open and instances
/// resolve their set from the initial batch.
#[derive(Debug)]
pub struct DefBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: DefId,
    name: String,
    declared: Declared,
}

impl<'a> DefBuilder<'a> {
    /// Declare the explicit allowed-kind set for this definition.
    pub fn constraints(mut self, kinds: KindSet) -> Self {
        self.declared = Declared::Fixed(kinds);
        self
    }

    /// Declare a single element kind. Ignored when an explicit constraint
    /// set is also supplied, which takes precedence.
    pub fn element(mut self, kind: Kind) -> Self {
        if !matches!(self.declared, Declared::Fixed(_)) {
            self.declared = Declared::Fixed(KindSet::single(kind));
        }
        self
    }

    /// Commit this definition to the registry builder.
    pub fn done(self) -> RegistryResult<DefId> {
        let def = ContainerDef::new(self.id, self.name, self.declared);
        self.builder.commit(def)
    }
}
