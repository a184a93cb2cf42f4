//! Unbounded cardinality arithmetic
//!
//! The count of distinct values of a type composes multiplicatively under
//! products and additively under sums, and the power-set combinator squares
//! in an exponent on top of that. Even modest leaf counts therefore escape
//! any fixed-width accumulator (`2^64` subsets of a 64-element base set), so
//! all cardinality arithmetic in this crate is performed in the unbounded
//! integer domain of [`num_bigint::BigUint`].
//!
//! [`Cardinality`] is a thin newtype around `BigUint` whose operations are
//! restricted to the closed forms the derivation engine actually needs:
//! addition (sums), multiplication (products), and powers of two (power
//! sets). Fixed-width arithmetic never occurs on the cardinality path; values
//! are widened on entry via the [`From`] impls and only narrowed on explicit
//! request via the fallible [`TryFrom`] impls.

use std::convert::TryFrom;
use std::fmt::Display;
use std::iter::{Product, Sum};
use std::ops::{Add, Deref, Mul};

use ::num_bigint::BigUint;

/// Count of distinct values of a type, in the unbounded integer domain.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Default)]
#[repr(transparent)]
pub struct Cardinality(pub BigUint);

impl Cardinality {
    /// Constructs a new `Cardinality` from an unbounded natural number.
    pub const fn new(count: BigUint) -> Self {
        Self(count)
    }

    /// Destructs a `Cardinality` and returns the `BigUint` it contains.
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns a reference to the `BigUint` contained in a borrowed `Cardinality`.
    pub const fn as_inner(&self) -> &BigUint {
        &self.0
    }

    /// The cardinality of an uninhabited type.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    /// The cardinality of a single-valued type.
    #[must_use]
    pub fn one() -> Self {
        Self(BigUint::from(1u8))
    }

    /// Returns `true` if this is the cardinality of an uninhabited type.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::default()
    }

    /// Computes `2^exponent` in the unbounded domain.
    ///
    /// This is the closed form for power-set cardinality, and the one
    /// composition that genuinely requires arbitrary precision: a base set
    /// of 64 elements already overflows a 64-bit accumulator.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` cannot be represented as a shift amount
    /// (i.e. exceeds `usize::MAX`), in which case the resulting count
    /// could not be meaningfully materialized or even iterated anyway.
    #[must_use]
    pub fn pow2(exponent: &Self) -> Self {
        let mut digits = exponent.0.iter_u64_digits();
        let exp: usize = match (digits.next(), digits.next()) {
            (None, _) => 0,
            (Some(lo), None) => usize::try_from(lo).unwrap_or_else(|_| {
                panic!(
                    "Cardinality::pow2: exponent {} exceeds shiftable range",
                    exponent
                )
            }),
            (Some(_), Some(_)) => panic!(
                "Cardinality::pow2: exponent {} exceeds shiftable range",
                exponent
            ),
        };
        Self(BigUint::from(1u8) << exp)
    }
}

impl std::fmt::Debug for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "|{}|", &self.0.to_string())
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        <BigUint as Display>::fmt(&self.0, f)
    }
}

impl From<Cardinality> for BigUint {
    fn from(val: Cardinality) -> Self {
        val.0
    }
}

impl From<BigUint> for Cardinality {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

macro_rules! impl_card_widen {
    ($src:ty) => {
        impl From<$src> for Cardinality {
            fn from(count: $src) -> Self {
                Self(<BigUint as From<$src>>::from(count))
            }
        }
    };
}

impl_card_widen!(u8);
impl_card_widen!(u16);
impl_card_widen!(u32);
impl_card_widen!(u64);
impl_card_widen!(usize);

macro_rules! impl_card_narrow {
    ($dst:ty) => {
        impl TryFrom<Cardinality> for $dst {
            type Error = <$dst as TryFrom<BigUint>>::Error;

            fn try_from(val: Cardinality) -> Result<$dst, Self::Error> {
                <$dst as TryFrom<BigUint>>::try_from(val.0)
            }
        }
    };
}

impl_card_narrow!(u8);
impl_card_narrow!(u16);
impl_card_narrow!(u32);
impl_card_narrow!(u64);
impl_card_narrow!(usize);

impl Deref for Cardinality {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Cardinality {
    type Output = Cardinality;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&'_ Cardinality> for Cardinality {
    type Output = Cardinality;

    fn add(self, rhs: &'_ Cardinality) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Mul for Cardinality {
    type Output = Cardinality;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&'_ Cardinality> for Cardinality {
    type Output = Cardinality;

    fn mul(self, rhs: &'_ Cardinality) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Sum for Cardinality {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Product for Cardinality {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}
