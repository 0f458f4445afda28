//! Runtime type identifiers and the allowed-kind set.
//!
//! A `Kind` names the runtime type of a container element. A `KindSet` is
//! the set of kinds a constrained container (or container definition)
//! permits as elements. Order is not significant; a set attached to a
//! container instance is never mutated in place, only replaced by
//! constructing a new container.

use crate::Value;
use std::collections::HashSet;
use std::fmt;

/// Runtime type identifier for a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    List,
}

impl Kind {
    /// Display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Bool => "Bool",
            Kind::Int => "Int",
            Kind::Float => "Float",
            Kind::Str => "Str",
            Kind::Bytes => "Bytes",
            Kind::List => "List",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of kinds a constrained container permits as elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KindSet {
    kinds: HashSet<Kind>,
}

impl KindSet {
    /// Create an empty kind set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single kind.
    pub fn single(kind: Kind) -> Self {
        let mut kinds = HashSet::new();
        kinds.insert(kind);
        Self { kinds }
    }

    /// Infer a kind set from an element batch: the distinct runtime kinds
    /// observed across the batch, duplicates collapsed.
    pub fn infer(items: &[Value]) -> Self {
        Self {
            kinds: items.iter().map(Value::kind).collect(),
        }
    }

    /// Add a kind to the set. Returns true if it was not already present.
    pub fn insert(&mut self, kind: Kind) -> bool {
        self.kinds.insert(kind)
    }

    /// Check whether a kind is permitted.
    pub fn contains(&self, kind: Kind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Check whether a value's runtime kind is permitted.
    pub fn permits(&self, value: &Value) -> bool {
        self.contains(value.kind())
    }

    /// Number of kinds in the set.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if the set permits no kinds at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over the kinds in the set (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        self.kinds.iter().copied()
    }

    /// Kinds in sorted order, for deterministic display and assertions.
    pub fn sorted(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self.kinds.iter().copied().collect();
        kinds.sort();
        kinds
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, kind) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", kind)?;
        }
        write!(f, "}}")
    }
}

/// Helper macro to create kind sets.
#[macro_export]
macro_rules! kinds {
    () => {
        $crate::KindSet::new()
    };
    ($($kind:expr),+ $(,)?) => {
        [$($kind),+].into_iter().collect::<$crate::KindSet>()
    };
}
