//! Mutation guard behavior.
//!
//! Every guarded operation is exercised for both the accept and the reject
//! path, with the atomicity contract checked via before-images: a rejected
//! mutation leaves the element sequence and the constraint set untouched.

use corral_tests::prelude::*;

mod single_element {
    use super::*;

    #[test]
    fn append_scenario_from_str_definition() {
        // GIVEN a {Str} container built from ["a", "b"]
        let registry = fixture_registry();
        let def = registry.get_def_by_name("StrArray").unwrap();
        let mut vec = TypedVec::from_def(def, vals!["a", "b"]).unwrap();

        // WHEN appending "c"
        vec.push(Value::Str("c".into())).unwrap();
        assert_eq!(vec.as_slice(), vals!["a", "b", "c"]);

        // AND WHEN appending the integer 1
        let before = snapshot(&vec);
        let err = vec.push(Value::Int(1)).unwrap_err();

        // THEN the violation is an element-kind mismatch and the container
        // still reads ["a", "b", "c"]
        assert_eq!(err, ConstraintError::element_type(Kind::Int, kinds![Kind::Str]));
        assert_unchanged(&vec, &before);
        assert_eq!(vec.as_slice(), vals!["a", "b", "c"]);
    }

    #[test]
    fn insert_and_set_respect_the_resolved_set() {
        let mut vec = TypedVec::with_constraints(vals![1i64, 3i64], kinds![Kind::Int]).unwrap();

        vec.insert(1, Value::Int(2)).unwrap();
        vec.set(0, Value::Int(0)).unwrap();
        assert_eq!(vec.as_slice(), vals![0i64, 2i64, 3i64]);

        let before = snapshot(&vec);
        assert!(vec.insert(1, Value::Str("x".into())).is_err());
        assert!(vec.set(2, Value::Bool(true)).is_err());
        assert_unchanged(&vec, &before);
    }

    #[test]
    fn out_of_bounds_is_reported_before_any_kind_check() {
        let mut vec = TypedVec::new(vals![1i64]).unwrap();
        assert_eq!(
            vec.set(5, Value::Int(2)).unwrap_err(),
            ConstraintError::index_out_of_bounds(5, 1)
        );
    }
}

mod multi_element {
    use super::*;

    #[test]
    fn extend_scenario_with_explicit_mixed_constraints() {
        // GIVEN explicit {Str, Int} constraints over [1, "a"]
        let mut vec =
            TypedVec::with_constraints(vals![1i64, "a"], kinds![Kind::Str, Kind::Int]).unwrap();

        // WHEN extending with ["d", "b"]
        vec.extend(vals!["d", "b"]).unwrap();
        assert_eq!(vec.as_slice(), vals![1i64, "a", "d", "b"]);

        // AND WHEN appending a floating-point value
        let before = snapshot(&vec);
        let err = vec.push(Value::Float(2.5)).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::element_type(Kind::Float, kinds![Kind::Str, Kind::Int])
        );
        assert_unchanged(&vec, &before);
    }

    #[test]
    fn mixed_batch_rejects_atomically() {
        let mut vec = TypedVec::with_constraints(vals!["a"], kinds![Kind::Str]).unwrap();
        let before = snapshot(&vec);

        // Valid prefix, invalid tail: nothing of the batch may land.
        let err = vec.extend(vals!["b", "c", 1i64, "d"]).unwrap_err();
        assert_eq!(err, ConstraintError::batch(2, Kind::Int, kinds![Kind::Str]));
        assert_unchanged(&vec, &before);
    }

    #[test]
    fn concat_in_place_distinguishes_shape_from_kind() {
        let mut vec = TypedVec::new(vals![1i64]).unwrap();
        let before = snapshot(&vec);

        // Scalar argument: shape violation.
        let err = vec.concat_in_place(Value::Int(2)).unwrap_err();
        assert_eq!(err, ConstraintError::argument_shape("List", Kind::Int));
        assert!(!err.is_kind_mismatch());
        assert_unchanged(&vec, &before);

        // List of wrong elements: kind violation.
        let err = vec.concat_in_place(Value::List(vals!["x"])).unwrap_err();
        assert!(err.is_kind_mismatch());
        assert_unchanged(&vec, &before);

        // List of right elements: applied whole.
        vec.concat_in_place(Value::List(vals![2i64, 3i64])).unwrap();
        assert_eq!(vec.as_slice(), vals![1i64, 2i64, 3i64]);
    }
}

mod repetition {
    use super::*;

    #[test]
    fn repeat_checks_only_the_count_argument() {
        let mut vec = TypedVec::new(vals!["a", "b"]).unwrap();

        vec.repeat_in_place(Value::Int(3)).unwrap();
        assert_eq!(vec.as_slice(), vals!["a", "b", "a", "b", "a", "b"]);

        let before = snapshot(&vec);
        for bad in [Value::Float(2.0), Value::Str("2".into()), Value::Int(-1)] {
            let err = vec.repeat_in_place(bad).unwrap_err();
            assert!(matches!(err, ConstraintError::ArgumentShape { .. }));
            assert_unchanged(&vec, &before);
        }
    }

    #[test]
    fn repeat_zero_empties_but_keeps_constraints() {
        let mut vec = TypedVec::new(vals![1i64]).unwrap();
        vec.repeat_in_place(Value::Int(0)).unwrap();

        assert!(vec.is_empty());
        assert_eq!(vec.constraints(), &kinds![Kind::Int]);
        vec.push(Value::Int(9)).unwrap();
    }
}

mod core_invariant {
    use super::*;

    #[test]
    fn stored_kinds_remain_subset_of_constraints_through_mixed_workload() {
        let mut vec =
            TypedVec::with_constraints(vals![1i64, "a"], kinds![Kind::Str, Kind::Int]).unwrap();

        let _ = vec.push(Value::Str("b".into()));
        let _ = vec.push(Value::Float(0.5));
        let _ = vec.extend(vals![2i64, "c"]);
        let _ = vec.extend(vals![true]);
        let _ = vec.concat_in_place(Value::List(vals!["d"]));
        let _ = vec.repeat_in_place(Value::Int(2));
        let _ = vec.set(0, Value::Bool(false));
        let _ = vec.insert(0, Value::Int(0));

        assert!(vec.iter().all(|v| vec.constraints().permits(v)));
        assert_eq!(vec.constraints(), &kinds![Kind::Str, Kind::Int]);
    }
}
