//! Power-set enumeration
//!
//! For a finite element type `T`, the set type `BTreeSet<T>` is itself
//! finite with exactly `2^|T|` values, one per subset of the full element
//! enumeration. This is the one combinator in the crate whose cardinality
//! is exponential rather than additive or multiplicative, and the reason
//! [`Cardinality`] arithmetic is unbounded: a base type of 64 elements
//! already produces a count no native integer holds.
//!
//! # Ordering
//!
//! Subsets are emitted in lexicographic order of their increasing element
//! sequences: the empty set first, then every subset beginning with the
//! first element (recursively ordered), then every subset beginning with
//! the second, and so on. Over `bool` that is `{}`, `{false}`,
//! `{false, true}`, `{true}`.

use std::collections::BTreeSet;

use crate::card::Cardinality;
use crate::exhaust::Exhaustive;

// Lexicographic subset order: [] first, then for each i in order, every
// subset whose least element is base[i], built by prepending base[i] to the
// recursively-ordered subsets of base[i+1..].
fn subsets_lex<T: Clone + Ord>(base: &[T]) -> Vec<BTreeSet<T>> {
    let mut out = vec![BTreeSet::new()];
    for (i, head) in base.iter().enumerate() {
        for mut rest in subsets_lex(&base[i + 1..]) {
            rest.insert(head.clone());
            out.push(rest);
        }
    }
    out
}

impl<T> Exhaustive for BTreeSet<T>
where
    T: Exhaustive + Clone + Ord,
{
    fn enumerate() -> Vec<Self> {
        subsets_lex(&T::enumerate())
    }

    fn cardinality() -> Cardinality {
        Cardinality::pow2(&T::cardinality())
    }
}
