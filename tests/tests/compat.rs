//! Capability marker and compatibility registration.
//!
//! Pins down the asymmetry between the two contracts: the structural
//! `conforms!` probe checks the `Constrained` trait only, while the broad
//! `compatible!` check additionally recognizes foreign types explicitly
//! registered in a `CompatRegistry`.

use corral_tests::prelude::*;

#[test]
fn typed_vec_conforms_structurally() {
    let vec = TypedVec::new(vals!["a"]).unwrap();
    assert!(conforms!(vec));

    // The introspection accessor is what the contract exposes.
    let c: &KindSet = Constrained::constraints(&vec);
    assert_eq!(c, &kinds![Kind::Str]);
}

#[test]
fn custom_opt_in_type_conforms() {
    struct Ring {
        constraints: KindSet,
    }

    impl Constrained for Ring {
        fn constraints(&self) -> &KindSet {
            &self.constraints
        }
    }

    let ring = Ring {
        constraints: kinds![Kind::Bytes],
    };
    assert!(conforms!(ring));
}

#[test]
fn foreign_types_never_conform_structurally() {
    let s = String::from("abc");
    let v: Vec<u8> = vec![1, 2, 3];
    assert!(!conforms!(s));
    assert!(!conforms!(v));
}

#[test]
fn registration_grants_compatibility_not_conformance() {
    // GIVEN an empty table: nothing is pre-registered
    let mut reg = CompatRegistry::new();
    assert!(reg.is_empty());

    let s = String::from("abc");
    assert!(!compatible!(reg, s));

    // WHEN registering the foreign type
    reg.register::<String>();

    // THEN it becomes compatible while still failing the structural probe
    assert!(compatible!(reg, s));
    assert!(!conforms!(s));

    // AND unregistering withdraws the recognition
    reg.unregister::<String>();
    assert!(!compatible!(reg, s));
}

#[test]
fn conforming_types_are_compatible_without_registration() {
    let reg = CompatRegistry::new();
    let vec = TypedVec::new(vals![1i64]).unwrap();
    assert!(compatible!(reg, vec));
}

#[test]
fn registry_is_inspectable() {
    let mut reg = CompatRegistry::new();
    reg.register::<String>();
    reg.register::<Vec<i64>>();

    assert_eq!(reg.len(), 2);
    let mut names: Vec<&str> = reg.names().collect();
    names.sort();
    assert!(names.contains(&std::any::type_name::<String>()));
}
