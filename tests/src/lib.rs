//! Integration test helpers for corral.
//!
//! Provides a prelude re-exporting the whole public surface, fixture
//! registries, and small assertion helpers shared by the integration tests.

use corral_container::TypedVec;
use corral_core::{Kind, KindSet, Value};
use corral_registry::{Registry, RegistryBuilder};

/// One-stop imports for integration tests.
pub mod prelude {
    pub use corral_container::{ConstraintError, Constrained, ConstraintResult, TypedVec};
    pub use corral_core::{kinds, vals, Kind, KindSet, Value};
    pub use corral_registry::{
        CompatRegistry, ContainerDef, Declared, DefId, Registry, RegistryBuilder, RegistryError,
    };
    pub use corral_container::{compatible, conforms};

    pub use crate::{assert_unchanged, fixture_registry, snapshot, Snapshot};
}

/// Registry with the container definitions the scenarios exercise:
/// `StrArray` fixed to `{Str}`, `IntArray` fixed to `{Int}`, and the open
/// `Vec` definition.
pub fn fixture_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .define("StrArray")
        .constraints([Kind::Str].into_iter().collect())
        .done()
        .expect("fixture def");
    builder
        .define("IntArray")
        .element(Kind::Int)
        .done()
        .expect("fixture def");
    builder.define("Vec").done().expect("fixture def");
    builder.build().expect("fixture registry")
}

/// A before-image of a container: element sequence plus resolved kind set.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub items: Vec<Value>,
    pub constraints: KindSet,
}

/// Capture the observable state of a container.
pub fn snapshot(vec: &TypedVec) -> Snapshot {
    Snapshot {
        items: vec.as_slice().to_vec(),
        constraints: vec.constraints().clone(),
    }
}

/// Assert a rejected mutation left the container exactly as captured:
/// identical element sequence and identical kind set.
pub fn assert_unchanged(vec: &TypedVec, before: &Snapshot) {
    assert_eq!(
        vec.as_slice(),
        before.items.as_slice(),
        "rejected mutation altered the element sequence"
    );
    assert_eq!(
        vec.constraints(),
        &before.constraints,
        "rejected mutation altered the constraint set"
    );
}
