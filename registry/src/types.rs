//! Container definition types.

use corral_core::{Kind, KindSet};
use std::fmt;

/// Identifier for a container definition in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

impl DefId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// Class-level constraint declaration, fixed at definition time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    /// An explicit set of allowed kinds. Consulted at every instance
    /// construction unless overridden by an explicit constructor argument.
    Fixed(KindSet),
    /// No concrete declaration; the effective set is resolved per instance
    /// from the initial element batch.
    Open,
}

impl Declared {
    /// Get the declared set if this declaration is concrete.
    pub fn fixed(&self) -> Option<&KindSet> {
        match self {
            Declared::Fixed(kinds) => Some(kinds),
            Declared::Open => None,
        }
    }

    /// Returns true if this is the open placeholder.
    pub fn is_open(&self) -> bool {
        matches!(self, Declared::Open)
    }
}

/// Container definition.
///
/// A definition names a derived container type and carries its class-level
/// constraint declaration. The declaration is immutable once the definition
/// is committed to a registry.
#[derive(Debug, Clone)]
pub struct ContainerDef {
    /// Unique identifier.
    pub id: DefId,
    /// Definition name.
    pub name: String,
    /// Class-level constraint declaration.
    pub declared: Declared,
}

impl ContainerDef {
    pub fn new(id: DefId, name: impl Into<String>, declared: Declared) -> Self {
        Self {
            id,
            name: name.into(),
            declared,
        }
    }

    /// Get the class-level kind set, if the declaration is concrete.
    pub fn fixed_constraints(&self) -> Option<&KindSet> {
        self.declared.fixed()
    }

    /// Returns true if instances must resolve their constraints themselves.
    pub fn is_open(&self) -> bool {
        self.declared.is_open()
    }

    /// Returns true if the declaration permits the given kind.
    /// An open declaration permits nothing by itself.
    pub fn declares(&self, kind: Kind) -> bool {
        self.declared
            .fixed()
            .map(|kinds| kinds.contains(kind))
            .unwrap_or(false)
    }
}
