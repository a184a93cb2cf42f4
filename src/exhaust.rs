//! Core of the enumeration API
//!
//! This module contains definitions for the high-level capability trait
//! [`Exhaustive`], which marks a type as finite and discrete and exposes the
//! two operations the rest of the library is built around: the complete
//! ordered sequence of the type's values, and the count of those values.
//!
//! While a great deal of the underlying machinery of this crate is subject
//! to customization by end-users, such as hand-written adapter strategies
//! from the [`prim`](crate::prim) module or hand-rolled shape isomorphisms
//! from the [`shape`](crate::shape) module, `Exhaustive` is the core of this
//! library: any upstream crate that never names it, even indirectly, will
//! derive little to no benefit from this library.
//!
//! # The cardinality law
//!
//! For every implementor, `cardinality()` must equal the exact length of
//! `enumerate()`. This is a correctness law, not an optimization: an
//! implementor that overrides [`cardinality`](Exhaustive::cardinality) with
//! a closed form assumes the burden of proving that equality for every
//! possible instance. The default implementation discharges the law
//! trivially (at the cost of materializing the sequence), and the
//! `check_consistency` feature flag re-verifies it dynamically at every
//! derivation site.
//!
//! # The escape hatch
//!
//! Some types are finite yet astronomically large (`u64`), or outright
//! infinite in the limit (`Vec<T>`, `String`, function types). Those types
//! implement only the weaker marker [`Inexhaustible`] and deliberately do
//! *not* implement `Exhaustive`, so that passing one to [`enumerate`] is a
//! missing-bound compile error rather than a runtime hang.

use crate::card::Cardinality;

/// Capability trait for finite, discrete types whose every value can be
/// listed exactly once.
///
/// Implementing [`Exhaustive`] can be as simple as providing a definition of
/// the required method [`enumerate`], but for types that have a closed-form
/// count cheaper than materializing the whole sequence, overriding
/// [`cardinality`] is recommended as long as the implementation conforms to
/// the cardinality law described in the module documentation.
///
/// # Implementation routes
///
/// In rough order of preference:
///
///   * `#[derive(Exhaustive)]` for plain structs and enums, which routes
///     through the structural derivation engine in [`shape`](crate::shape);
///   * one of the three adapter strategies in [`prim`](crate::prim)
///     (bounded-ordinal, successor-from-zero, literal-list) for atomic
///     leaf types;
///   * a fully hand-written impl, as a last resort.
///
/// # Ordering
///
/// The produced sequence is deterministic and structural: constructor
/// declaration order first, and within one constructor the last field
/// varies fastest. Two independent calls must return identical sequences.
///
/// [`enumerate`]: Exhaustive::enumerate
/// [`cardinality`]: Exhaustive::cardinality
pub trait Exhaustive: Sized {
    /// Materializes the complete ordered sequence of values of `Self`.
    ///
    /// The returned vector is freshly allocated and exclusively owned by the
    /// caller; repeated calls may legally recompute it (specific adapters
    /// may memoize internally, but no caching is observable at this level).
    ///
    /// The sequence must contain every constructible value of `Self`
    /// exactly once, in the structural order described at the trait level.
    fn enumerate() -> Vec<Self>;

    /// Counts the distinct values of `Self` in the unbounded integer domain.
    ///
    /// The default implementation falls back to the length of
    /// [`enumerate`](Exhaustive::enumerate), which is always correct but
    /// pays the full materialization cost. Types with compositional
    /// structure should override this with the closed form so that callers
    /// (notably [`enumerate_below`](crate::guard::enumerate_below)) can
    /// reject oversized types before any allocation happens.
    #[must_use]
    fn cardinality() -> Cardinality {
        Cardinality::from(Self::enumerate().len())
    }
}

/// Marker for types deliberately excluded from exhaustive enumeration.
///
/// An `Inexhaustible` type is discrete and possibly even finite, but its
/// value count is so large that materializing the enumeration could never
/// complete in practice (`u32` upwards, floats viewed as bit patterns), or
/// the type is genuinely unbounded (`String`, `Vec<T>`, function types).
///
/// The marker carries no operations. Its entire purpose is to record that
/// the absence of an [`Exhaustive`] impl for these types is a decision, not
/// an oversight: attempting `enumerate::<u64>()` fails to compile on the
/// missing `Exhaustive` bound, and the `Inexhaustible` impl is where that
/// refusal is documented.
pub trait Inexhaustible {}

macro_rules! inexhaustible {
    ($($x:ty),+ $(,)?) => {
        $(impl Inexhaustible for $x {})+
    };
}

inexhaustible!(u32, i32, u64, i64, u128, i128, usize, isize);
inexhaustible!(f32, f64);
inexhaustible!(String, &'_ str);

impl<T> Inexhaustible for Vec<T> {}
impl<T> Inexhaustible for &'_ [T] {}

// Function types are the canonical "astronomical" case: |B|^|A| values even
// when both sides are small.
impl<A, B> Inexhaustible for fn(A) -> B {}

/// Materializes the complete ordered sequence of values of `T`.
///
/// Free-function form of [`Exhaustive::enumerate`], total and terminating
/// for every `T: Exhaustive`.
#[inline]
#[must_use]
pub fn enumerate<T: Exhaustive>() -> Vec<T> {
    T::enumerate()
}

/// Counts the distinct values of `T` without necessarily enumerating them.
///
/// Free-function form of [`Exhaustive::cardinality`].
#[inline]
#[must_use]
pub fn cardinality<T: Exhaustive>() -> Cardinality {
    T::cardinality()
}
