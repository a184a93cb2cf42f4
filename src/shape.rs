//! Shape algebra and structural derivation engine
//!
//! Every composite type is representable, for enumeration purposes, as a
//! tree built from a closed set of six shape constructors: [`UnitShape`],
//! [`VoidShape`], [`Leaf`], [`Product`], [`Sum`] and [`Labeled`]. A
//! constructor with N fields decomposes into a right-nested chain of
//! `Product`, and a type with K constructors into a right-nested chain of
//! `Sum`, each in declaration order.
//!
//! The derivation engine is nothing more than the [`Exhaustive`] impls over
//! these six types: ordinary recursive structural code with no reflection
//! and no per-type special-casing. Composing shapes at the type level has a
//! useful side effect — a statically infinite shape cannot be written down,
//! so the "structural error" of feeding a non-finite structure to the engine
//! is a missing impl at compile time, never a runtime condition.
//!
//! # The isomorphism layer
//!
//! A concrete user type never *is* its shape; it is merely isomorphic to
//! one. The [`Representable`] trait records that isomorphism (a shape type
//! plus conversions in both directions), and the free functions
//! [`derive_enumeration`] and [`derive_cardinality`] translate between the
//! shape-level derivation and the type-level [`Exhaustive`] operations.
//! The `#[derive(Exhaustive)]` macro exists solely to write `Representable`
//! impls (and the two-line `Exhaustive` impl delegating here) from a type's
//! declared structure.
//!
//! # Ordering
//!
//! Enumeration order is depth-first and deterministic: `Sum` emits all
//! left-tagged values before any right-tagged value, and `Product` iterates
//! its left component in the outer loop (left varies slowest, the right
//! field is the inner loop). Together with right-nested chain construction
//! this reproduces, element for element, the order of a hand-written list
//! that walks constructors in declaration order with the last field
//! varying fastest.

use std::marker::PhantomData;

use crate::card::Cardinality;
use crate::exhaust::Exhaustive;

/// Shape with exactly one value and no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnitShape;

/// Shape with no values at all.
///
/// An uninhabited `enum`, so a `VoidShape` value can never be constructed;
/// a top-level `VoidShape` legally enumerates to the empty sequence with
/// cardinality zero rather than being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoidShape {}

/// Shape wrapping one field of a primitive or previously-derived
/// [`Exhaustive`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Leaf<T>(pub T);

/// Shape of a pair of independent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Product<L, R>(pub L, pub R);

/// Shape of a tagged choice between two alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sum<L, R> {
    /// Values of the earlier-declared alternative.
    Left(L),
    /// Values of the later-declared alternative.
    Right(R),
}

/// Compile-time metadata attached to a shape via [`Labeled`].
///
/// Implementors are zero-sized marker types naming a constructor, field or
/// type; the derive macro generates one per variant. Labels have no effect
/// on enumeration or cardinality.
pub trait ShapeLabel {
    /// Source-level name this label stands for.
    const NAME: &'static str;
}

/// Anonymous label for hand-written shapes that have nothing to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anon;

impl ShapeLabel for Anon {
    const NAME: &'static str = "";
}

/// Shape annotated with a [`ShapeLabel`]; a pure pass-through.
///
/// Both fields are public so that derive-generated code in downstream
/// crates can destructure the wrapper directly.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct Labeled<S, L: ShapeLabel = Anon>(pub S, pub PhantomData<L>);

impl<S, L: ShapeLabel> Labeled<S, L> {
    /// Attaches the label `L` to the shape `inner`.
    #[inline]
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self(inner, PhantomData)
    }

    /// Discards the label and returns the annotated shape.
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Returns the source-level name recorded by the label.
    #[inline]
    #[must_use]
    pub const fn name() -> &'static str {
        L::NAME
    }
}

// Hand-written so that `L` (a zero-sized marker) incurs no Clone/Copy bound.
impl<S: Clone, L: ShapeLabel> Clone for Labeled<S, L> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<S: Copy, L: ShapeLabel> Copy for Labeled<S, L> {}

impl Exhaustive for UnitShape {
    fn enumerate() -> Vec<Self> {
        vec![UnitShape]
    }

    fn cardinality() -> Cardinality {
        Cardinality::one()
    }
}

impl Exhaustive for VoidShape {
    fn enumerate() -> Vec<Self> {
        Vec::new()
    }

    fn cardinality() -> Cardinality {
        Cardinality::zero()
    }
}

impl<T: Exhaustive> Exhaustive for Leaf<T> {
    fn enumerate() -> Vec<Self> {
        T::enumerate().into_iter().map(Leaf).collect()
    }

    fn cardinality() -> Cardinality {
        T::cardinality()
    }
}

impl<L, R> Exhaustive for Product<L, R>
where
    L: Exhaustive + Clone,
    R: Exhaustive + Clone,
{
    /// Cartesian cross-product, left varying slowest.
    fn enumerate() -> Vec<Self> {
        let lefts = L::enumerate();
        let rights = R::enumerate();
        let mut pairs = Vec::with_capacity(lefts.len() * rights.len());
        for l in &lefts {
            for r in &rights {
                pairs.push(Product(l.clone(), r.clone()));
            }
        }
        pairs
    }

    fn cardinality() -> Cardinality {
        L::cardinality() * R::cardinality()
    }
}

impl<L, R> Exhaustive for Sum<L, R>
where
    L: Exhaustive,
    R: Exhaustive,
{
    /// All left-tagged values in order, then all right-tagged values in order.
    fn enumerate() -> Vec<Self> {
        L::enumerate()
            .into_iter()
            .map(Sum::Left)
            .chain(R::enumerate().into_iter().map(Sum::Right))
            .collect()
    }

    fn cardinality() -> Cardinality {
        L::cardinality() + R::cardinality()
    }
}

impl<S: Exhaustive, L: ShapeLabel> Exhaustive for Labeled<S, L> {
    fn enumerate() -> Vec<Self> {
        S::enumerate().into_iter().map(Labeled::new).collect()
    }

    fn cardinality() -> Cardinality {
        S::cardinality()
    }
}

/// Isomorphism between a concrete type and its generic shape representation.
///
/// This is the main integration point for external code: a derive macro (or
/// a hand-written impl) supplies the shape tree built from the type's own
/// declared structure, and [`derive_enumeration`]/[`derive_cardinality`]
/// hand back the two [`Exhaustive`] operations.
///
/// # Invariant
///
/// `from_shape` and `into_shape` must be mutually inverse bijections; if
/// they are, the engine-level distinctness and completeness guarantees
/// transfer to the represented type unchanged.
pub trait Representable: Sized {
    /// Generic shape this type is isomorphic to, built from the closed
    /// algebra of this module.
    type Shape: Exhaustive;

    /// Reconstructs a value of this type from its shape representation.
    fn from_shape(shape: Self::Shape) -> Self;

    /// Decomposes a value of this type into its shape representation.
    fn into_shape(self) -> Self::Shape;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "check_consistency")] {
        /// Derives the complete enumeration of `T` by enumerating its shape
        /// and mapping each shape value back through the isomorphism.
        ///
        /// With the `check_consistency` feature enabled, every derivation
        /// re-verifies the cardinality law (`cardinality == length`) and
        /// panics on violation, which can only arise from a broken
        /// hand-written [`Representable`] or leaf adapter.
        #[must_use]
        pub fn derive_enumeration<T: Representable>() -> Vec<T> {
            let values: Vec<T> = <T::Shape as Exhaustive>::enumerate()
                .into_iter()
                .map(T::from_shape)
                .collect();
            let counted = derive_cardinality::<T>();
            assert_eq!(
                counted,
                Cardinality::from(values.len()),
                "derive_enumeration: cardinality law violated for {}",
                std::any::type_name::<T>()
            );
            values
        }
    } else {
        /// Derives the complete enumeration of `T` by enumerating its shape
        /// and mapping each shape value back through the isomorphism.
        #[must_use]
        pub fn derive_enumeration<T: Representable>() -> Vec<T> {
            <T::Shape as Exhaustive>::enumerate()
                .into_iter()
                .map(T::from_shape)
                .collect()
        }
    }
}

/// Derives the cardinality of `T` from the closed forms of its shape,
/// without materializing any values.
#[inline]
#[must_use]
pub fn derive_cardinality<T: Representable>() -> Cardinality {
    <T::Shape as Exhaustive>::cardinality()
}

#[cfg(test)]
mod test {
    use super::*;

    // Hand-rolled isomorphism for a two-constructor type, written the way
    // the derive macro would have written it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Signal {
        Quiet,
        Loud(bool),
    }

    struct QuietLabel;
    impl ShapeLabel for QuietLabel {
        const NAME: &'static str = "Quiet";
    }

    struct LoudLabel;
    impl ShapeLabel for LoudLabel {
        const NAME: &'static str = "Loud";
    }

    impl Representable for Signal {
        type Shape = Sum<Labeled<UnitShape, QuietLabel>, Labeled<Leaf<bool>, LoudLabel>>;

        fn from_shape(shape: Self::Shape) -> Self {
            match shape {
                Sum::Left(Labeled(UnitShape, _)) => Signal::Quiet,
                Sum::Right(Labeled(Leaf(flag), _)) => Signal::Loud(flag),
            }
        }

        fn into_shape(self) -> Self::Shape {
            match self {
                Signal::Quiet => Sum::Left(Labeled::new(UnitShape)),
                Signal::Loud(flag) => Sum::Right(Labeled::new(Leaf(flag))),
            }
        }
    }

    #[test]
    fn unit_and_void() {
        assert_eq!(vec![UnitShape], UnitShape::enumerate());
        assert_eq!(Cardinality::one(), UnitShape::cardinality());
        assert!(VoidShape::enumerate().is_empty());
        assert_eq!(Cardinality::zero(), VoidShape::cardinality());
    }

    #[test]
    fn product_left_varies_slowest() {
        let pairs = <Product<Leaf<bool>, Leaf<bool>>>::enumerate();
        assert_eq!(
            vec![
                Product(Leaf(false), Leaf(false)),
                Product(Leaf(false), Leaf(true)),
                Product(Leaf(true), Leaf(false)),
                Product(Leaf(true), Leaf(true)),
            ],
            pairs
        );
        assert_eq!(
            Cardinality::from(4u8),
            <Product<Leaf<bool>, Leaf<bool>>>::cardinality()
        );
    }

    #[test]
    fn sum_left_precedes_right() {
        let tags = <Sum<Leaf<bool>, Leaf<bool>>>::enumerate();
        assert_eq!(
            vec![
                Sum::Left(Leaf(false)),
                Sum::Left(Leaf(true)),
                Sum::Right(Leaf(false)),
                Sum::Right(Leaf(true)),
            ],
            tags
        );
    }

    #[test]
    fn void_absorbs_products_and_passes_through_sums() {
        assert!(<Product<Leaf<bool>, VoidShape>>::enumerate().is_empty());
        assert_eq!(
            Cardinality::zero(),
            <Product<Leaf<bool>, VoidShape>>::cardinality()
        );
        assert_eq!(
            Cardinality::from(2u8),
            <Sum<Leaf<bool>, VoidShape>>::cardinality()
        );
    }

    #[test]
    fn labels_are_pass_through() {
        assert_eq!("Quiet", <Labeled<UnitShape, QuietLabel>>::name());
        assert_eq!(
            <Labeled<Leaf<bool>, LoudLabel>>::cardinality(),
            <Leaf<bool>>::cardinality()
        );
    }

    #[test]
    fn derived_enumeration_walks_constructors_in_order() {
        let all = derive_enumeration::<Signal>();
        assert_eq!(
            vec![Signal::Quiet, Signal::Loud(false), Signal::Loud(true)],
            all
        );
        assert_eq!(Cardinality::from(3u8), derive_cardinality::<Signal>());
    }

    #[test]
    fn iso_roundtrip() {
        for value in derive_enumeration::<Signal>() {
            assert_eq!(value.clone(), Signal::from_shape(value.into_shape()));
        }
    }
}
