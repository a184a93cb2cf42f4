//! End-to-end tests of `#[derive(Exhaustive)]` and the properties the
//! library guarantees for derived types.

use std::collections::BTreeSet;
use std::convert::Infallible;

use plenum::{
    cardinality, derive_cardinality, enumerate, enumerate_below, Cardinality, Exhaustive,
    Representable, ShapeLabel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Exhaustive)]
enum Verdict {
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Exhaustive)]
struct Review {
    verdict: Verdict,
    escalate: bool,
}

#[derive(Debug, Clone, PartialEq, Exhaustive)]
enum Route {
    Drop,
    Forward(bool),
    Split { left: bool, right: Verdict },
}

#[derive(Debug, Clone, PartialEq, Exhaustive)]
struct Flag(bool);

#[derive(Debug, Clone, PartialEq, Exhaustive)]
struct Nothing;

#[derive(Debug, Clone, PartialEq, Exhaustive)]
enum Never {}

#[test]
fn unit_struct_is_single_valued() {
    assert_eq!(vec![Nothing], enumerate::<Nothing>());
    assert_eq!(Cardinality::one(), cardinality::<Nothing>());
}

#[test]
fn empty_enum_is_uninhabited_not_an_error() {
    assert!(enumerate::<Never>().is_empty());
    assert_eq!(Cardinality::zero(), cardinality::<Never>());
}

#[test]
fn newtype_tracks_its_field() {
    assert_eq!(vec![Flag(false), Flag(true)], enumerate::<Flag>());
    assert_eq!(cardinality::<bool>(), cardinality::<Flag>());
}

#[test]
fn enum_variants_come_in_declaration_order() {
    assert_eq!(vec![Verdict::Accept, Verdict::Reject], enumerate::<Verdict>());
}

#[test]
fn struct_fields_vary_last_field_fastest() {
    assert_eq!(
        vec![
            Review { verdict: Verdict::Accept, escalate: false },
            Review { verdict: Verdict::Accept, escalate: true },
            Review { verdict: Verdict::Reject, escalate: false },
            Review { verdict: Verdict::Reject, escalate: true },
        ],
        enumerate::<Review>()
    );
    assert_eq!(Cardinality::from(4u8), cardinality::<Review>());
}

#[test]
fn mixed_enum_interleaves_sums_and_products() {
    use Route::*;
    assert_eq!(
        vec![
            Drop,
            Forward(false),
            Forward(true),
            Split { left: false, right: Verdict::Accept },
            Split { left: false, right: Verdict::Reject },
            Split { left: true, right: Verdict::Accept },
            Split { left: true, right: Verdict::Reject },
        ],
        enumerate::<Route>()
    );
    // 1 + 2 + 2*2
    assert_eq!(Cardinality::from(7u8), cardinality::<Route>());
}

#[test]
fn cardinality_needs_no_materialization() {
    assert_eq!(Cardinality::from(7u8), derive_cardinality::<Route>());
}

#[test]
fn labels_record_source_names() {
    fn label_of<T: Representable>() -> &'static str
    where
        T::Shape: LabelWitness,
    {
        <T::Shape as LabelWitness>::label()
    }

    trait LabelWitness {
        fn label() -> &'static str;
    }

    impl<S, L: ShapeLabel> LabelWitness for plenum::Labeled<S, L> {
        fn label() -> &'static str {
            L::NAME
        }
    }

    assert_eq!("Review", label_of::<Review>());
    assert_eq!("Nothing", label_of::<Nothing>());
}

#[test]
fn enumeration_is_deterministic() {
    assert_eq!(enumerate::<Route>(), enumerate::<Route>());
    assert_eq!(enumerate::<Review>(), enumerate::<Review>());
}

#[test]
fn all_values_are_distinct_and_complete() {
    let all = enumerate::<Route>();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
    // Completeness spot-check: any value we can write down is in the list.
    assert!(all.contains(&Route::Split { left: true, right: Verdict::Reject }));
}

#[test]
fn derived_types_compose_with_library_combinators() {
    assert_eq!(Cardinality::from(3u8), cardinality::<Option<Verdict>>());
    assert_eq!(
        Cardinality::from(4u8),
        cardinality::<Result<Verdict, Verdict>>()
    );
    assert_eq!(Cardinality::from(4u8), cardinality::<BTreeSet<Verdict>>());
    assert_eq!(Cardinality::from(8u8), cardinality::<[Verdict; 3]>());
    assert_eq!(Cardinality::from(14u8), cardinality::<(Verdict, Route)>());
}

#[test]
fn guards_apply_to_derived_types() {
    let outcome = enumerate_below::<Route>(Cardinality::from(100u8));
    assert_eq!(Some(7), outcome.into_values().map(|v| v.len()));

    let refused = enumerate_below::<Route>(Cardinality::from(7u8));
    assert!(refused.is_rejected());
}

#[test]
fn law_holds_across_the_board() {
    fn check<T: Exhaustive>() {
        assert_eq!(T::cardinality(), Cardinality::from(T::enumerate().len()));
    }
    check::<Verdict>();
    check::<Review>();
    check::<Route>();
    check::<Flag>();
    check::<Nothing>();
    check::<Never>();
    check::<Option<Route>>();
    check::<Result<Review, Infallible>>();
    check::<BTreeSet<Verdict>>();
    check::<[Review; 2]>();
}
