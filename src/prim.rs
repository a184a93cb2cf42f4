//! Leaf adapters for primitive and atomic types
//!
//! The structural engine in [`shape`](crate::shape) bottoms out at leaf
//! types, which need bespoke [`Exhaustive`] impls. Rather than writing each
//! one from scratch, this module provides three reusable adapter strategies
//! and registers the standard-library primitives through them:
//!
//!   * **bounded-ordinal** ([`Ordinal`]): the type has a least and a
//!     greatest value and an order-embedding into the integers, possibly
//!     with gaps (`char` skips the surrogate range). Enumeration walks the
//!     ordinal range; cardinality is the closed form
//!     `1 + ord(last) - ord(first)`, computed in signed unbounded
//!     arithmetic so the fixed-width extremes of `i16` never overflow an
//!     intermediate.
//!   * **successor-from-zero** ([`Successor`]): the type has a first value
//!     and a partial successor function that eventually returns `None`.
//!     Enumeration iterates the successor chain; no closed form is assumed.
//!   * **literal-list** ([`literal_exhaustive!`](crate::literal_exhaustive)):
//!     for small closed types the full value list is simply written out.
//!
//! Types that are technically finite but practically unenumerable (`u32`
//! and wider, floats as bit patterns) are registered as
//! [`Inexhaustible`](crate::exhaust::Inexhaustible) instead, over in
//! [`exhaust`](crate::exhaust).

use std::convert::{Infallible, TryFrom};
use std::marker::PhantomData;
use std::num::NonZeroU8;

use ::num_bigint::{BigInt, BigUint};

use crate::card::Cardinality;
use crate::exhaust::Exhaustive;

/// Bounded-ordinal adapter: an order-embedding of `Self` into the integers,
/// with explicit least and greatest values.
///
/// # Invariant
///
/// `ordinal` must be strictly monotone over the enumeration order of `Self`,
/// and `from_ordinal` must invert it on the image of `ordinal`. The image
/// need not be contiguous as long as both directions agree on the gaps
/// (`char` maps code points above the surrogate block down by `0x800`).
pub trait Ordinal: Sized {
    /// Least value of the type.
    fn first() -> Self;

    /// Greatest value of the type.
    fn last() -> Self;

    /// Position of `self` in the signed unbounded integer domain.
    fn ordinal(&self) -> BigInt;

    /// Inverts [`ordinal`](Ordinal::ordinal).
    ///
    /// # Panics
    ///
    /// May panic when `ord` lies outside the image of `ordinal`; callers
    /// inside this crate only ever pass values produced by walking the
    /// `first()..=last()` ordinal range.
    fn from_ordinal(ord: &BigInt) -> Self;
}

/// Enumerates a bounded-ordinal type by walking its ordinal range.
#[must_use]
pub fn ordinal_enumerate<T: Ordinal>() -> Vec<T> {
    let last = T::last().ordinal();
    let mut ord = T::first().ordinal();
    let mut values = Vec::new();
    while ord <= last {
        values.push(T::from_ordinal(&ord));
        ord += 1;
    }
    values
}

/// Closed-form cardinality of a bounded-ordinal type:
/// `1 + ord(last) - ord(first)`.
///
/// The subtraction is performed in `BigInt` so that types whose ordinals
/// span the full width of a native integer (`i16`, for one) cannot overflow
/// an intermediate value.
#[must_use]
pub fn ordinal_cardinality<T: Ordinal>() -> Cardinality {
    let span: BigInt = BigInt::from(1u8) + T::last().ordinal() - T::first().ordinal();
    let count: BigUint = span
        .to_biguint()
        .unwrap_or_else(|| panic!("ordinal_cardinality: last() orders below first()"));
    Cardinality::new(count)
}

/// Successor-from-zero adapter: a first value and a partial successor
/// function that exhausts in finitely many steps.
pub trait Successor: Sized {
    /// First value of the successor chain.
    fn zero() -> Self;

    /// Next value in the chain, or `None` once the type is exhausted.
    fn successor(&self) -> Option<Self>;
}

/// Enumerates a successor-chain type by iterating from its first value.
#[must_use]
pub fn successor_enumerate<T: Successor>() -> Vec<T> {
    let mut values = vec![T::zero()];
    while let Some(next) = values[values.len() - 1].successor() {
        values.push(next);
    }
    values
}

/// Registers an [`Exhaustive`] impl for a small closed type by writing out
/// its full value list literally, in enumeration order.
///
/// ```
/// # #[derive(Debug, Clone, PartialEq)]
/// # struct Coin;
/// # impl Coin { const HEADS: Coin = Coin; const TAILS: Coin = Coin; }
/// plenum::literal_exhaustive!(Coin => [Coin::HEADS, Coin::TAILS]);
/// ```
#[macro_export]
macro_rules! literal_exhaustive {
    ($t:ty => [$($v:expr),+ $(,)?]) => {
        impl $crate::exhaust::Exhaustive for $t {
            fn enumerate() -> ::std::vec::Vec<Self> {
                vec![$($v),+]
            }

            fn cardinality() -> $crate::card::Cardinality {
                $crate::card::Cardinality::from(<[&str]>::len(&[$(stringify!($v)),+]))
            }
        }
    };
}

literal_exhaustive!(bool => [false, true]);

literal_exhaustive!(std::cmp::Ordering => [
    std::cmp::Ordering::Less,
    std::cmp::Ordering::Equal,
    std::cmp::Ordering::Greater,
]);

impl Exhaustive for () {
    fn enumerate() -> Vec<Self> {
        vec![()]
    }

    fn cardinality() -> Cardinality {
        Cardinality::one()
    }
}

impl Exhaustive for Infallible {
    fn enumerate() -> Vec<Self> {
        Vec::new()
    }

    fn cardinality() -> Cardinality {
        Cardinality::zero()
    }
}

// One value regardless of the parameter, which need not itself be
// enumerable (PhantomData<String> is still single-valued).
impl<T: ?Sized> Exhaustive for PhantomData<T> {
    fn enumerate() -> Vec<Self> {
        vec![PhantomData]
    }

    fn cardinality() -> Cardinality {
        Cardinality::one()
    }
}

macro_rules! ordinal_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Ordinal for $t {
                fn first() -> Self {
                    <$t>::MIN
                }

                fn last() -> Self {
                    <$t>::MAX
                }

                fn ordinal(&self) -> BigInt {
                    BigInt::from(*self)
                }

                fn from_ordinal(ord: &BigInt) -> Self {
                    <$t>::try_from(ord).unwrap_or_else(|_| {
                        panic!(
                            "from_ordinal: {} out of range for {}",
                            ord,
                            stringify!($t)
                        )
                    })
                }
            }

            impl Exhaustive for $t {
                // The ordinal image is contiguous, so the range iterator
                // is equivalent to (and cheaper than) the ordinal walk.
                fn enumerate() -> Vec<Self> {
                    (<$t>::MIN..=<$t>::MAX).collect()
                }

                fn cardinality() -> Cardinality {
                    ordinal_cardinality::<$t>()
                }
            }
        )+
    };
}

ordinal_int!(u8, i8, u16, i16);

/// Number of Unicode scalar values: `0x10FFFF + 1` code points minus the
/// `0x800`-wide surrogate block.
const CHAR_COUNT: u32 = 0x10_FFFF + 1 - 0x800;

/// First code point above the surrogate block.
const SURROGATE_END: u32 = 0xE000;

/// Width of the surrogate gap in the code-point space.
const SURROGATE_GAP: u32 = 0x800;

impl Ordinal for char {
    fn first() -> Self {
        '\0'
    }

    fn last() -> Self {
        char::MAX
    }

    fn ordinal(&self) -> BigInt {
        let code = u32::from(*self);
        if code < SURROGATE_END {
            BigInt::from(code)
        } else {
            BigInt::from(code - SURROGATE_GAP)
        }
    }

    fn from_ordinal(ord: &BigInt) -> Self {
        let n = u32::try_from(ord)
            .unwrap_or_else(|_| panic!("from_ordinal: {} out of range for char", ord));
        let code = if n < SURROGATE_END - SURROGATE_GAP {
            n
        } else {
            n + SURROGATE_GAP
        };
        char::from_u32(code)
            .unwrap_or_else(|| panic!("from_ordinal: {} out of range for char", ord))
    }
}

lazy_static::lazy_static! {
    // Over a million values; computed once, cloned per enumerate() call.
    static ref CHAR_TABLE: Vec<char> = ('\0'..=char::MAX).collect();
}

impl Exhaustive for char {
    fn enumerate() -> Vec<Self> {
        CHAR_TABLE.clone()
    }

    fn cardinality() -> Cardinality {
        Cardinality::from(CHAR_COUNT)
    }
}

impl Successor for NonZeroU8 {
    fn zero() -> Self {
        NonZeroU8::MIN
    }

    fn successor(&self) -> Option<Self> {
        self.get().checked_add(1).and_then(NonZeroU8::new)
    }
}

impl Exhaustive for NonZeroU8 {
    fn enumerate() -> Vec<Self> {
        successor_enumerate()
    }

    fn cardinality() -> Cardinality {
        Cardinality::from(u8::MAX)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bool_order_is_false_then_true() {
        assert_eq!(vec![false, true], bool::enumerate());
        assert_eq!(Cardinality::from(2u8), bool::cardinality());
    }

    #[test]
    fn ordering_follows_declaration_order() {
        use std::cmp::Ordering::*;
        assert_eq!(vec![Less, Equal, Greater], <std::cmp::Ordering>::enumerate());
        assert_eq!(Cardinality::from(3u8), <std::cmp::Ordering>::cardinality());
    }

    #[test]
    fn fixed_ints_span_min_to_max() {
        let bytes = u8::enumerate();
        assert_eq!(256, bytes.len());
        assert_eq!(Some(&0u8), bytes.first());
        assert_eq!(Some(&255u8), bytes.last());

        let signed = i8::enumerate();
        assert_eq!(Some(&i8::MIN), signed.first());
        assert_eq!(Some(&i8::MAX), signed.last());
        assert_eq!(Cardinality::from(256u16), i8::cardinality());
        assert_eq!(Cardinality::from(65536u32), i16::cardinality());
    }

    #[test]
    fn ordinal_walk_matches_range_collect() {
        assert_eq!(i8::enumerate(), ordinal_enumerate::<i8>());
    }

    #[test]
    fn char_skips_surrogates_without_losing_count() {
        assert_eq!(Cardinality::from(1_112_064u32), char::cardinality());
        let table = char::enumerate();
        assert_eq!(1_112_064, table.len());
        assert_eq!(Some(&'\0'), table.first());
        assert_eq!(Some(&char::MAX), table.last());
        // The ordinal embedding is contiguous across the surrogate gap.
        assert_eq!(char::ordinal(&'\u{D7FF}') + 1, char::ordinal(&'\u{E000}'));
        assert_eq!('\u{E000}', char::from_ordinal(&char::ordinal(&'\u{E000}')));
    }

    #[test]
    fn nonzero_u8_excludes_zero() {
        let values = NonZeroU8::enumerate();
        assert_eq!(255, values.len());
        assert_eq!(1, values[0].get());
        assert_eq!(255, values[254].get());
        assert_eq!(Cardinality::from(255u8), NonZeroU8::cardinality());
    }

    #[test]
    fn trivial_leaves() {
        assert_eq!(vec![()], <()>::enumerate());
        assert!(Infallible::enumerate().is_empty());
        assert_eq!(Cardinality::one(), <PhantomData<String>>::cardinality());
    }
}
