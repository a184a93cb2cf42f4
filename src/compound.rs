//! Enumeration of standard-library compound types
//!
//! `Option`, `Result`, tuples, arrays and `Box` are ordinary sums and
//! products and could each be routed through the shape engine with a
//! hand-written isomorphism; the direct impls here are shorter and keep the
//! same order guarantees: earlier constructor first (`None` before `Some`,
//! `Ok` before `Err`), and within a product the last position varies
//! fastest.
//!
//! Tuple impls cover arity 1 through 4 by default; enabling the
//! `large_tuples` feature extends coverage through arity 8.

use crate::card::Cardinality;
use crate::exhaust::Exhaustive;

impl<T: Exhaustive> Exhaustive for Option<T> {
    /// `None`, then every `Some` in the element order of `T`.
    fn enumerate() -> Vec<Self> {
        std::iter::once(None)
            .chain(T::enumerate().into_iter().map(Some))
            .collect()
    }

    fn cardinality() -> Cardinality {
        Cardinality::one() + T::cardinality()
    }
}

impl<T: Exhaustive, E: Exhaustive> Exhaustive for Result<T, E> {
    /// Every `Ok` in the element order of `T`, then every `Err` in the
    /// element order of `E`.
    fn enumerate() -> Vec<Self> {
        T::enumerate()
            .into_iter()
            .map(Ok)
            .chain(E::enumerate().into_iter().map(Err))
            .collect()
    }

    fn cardinality() -> Cardinality {
        T::cardinality() + E::cardinality()
    }
}

impl<T: Exhaustive> Exhaustive for Box<T> {
    fn enumerate() -> Vec<Self> {
        T::enumerate().into_iter().map(Box::new).collect()
    }

    fn cardinality() -> Cardinality {
        T::cardinality()
    }
}

impl<T: Exhaustive> Exhaustive for (T,) {
    fn enumerate() -> Vec<Self> {
        T::enumerate().into_iter().map(|value| (value,)).collect()
    }

    fn cardinality() -> Cardinality {
        T::cardinality()
    }
}

// Arity N decomposes as head x (tail...): the head drives the outer loop,
// so by induction the last position varies fastest.
macro_rules! tuple_exhaustive {
    ($head:ident, $($tail:ident),+) => {
        impl<$head, $($tail),+> Exhaustive for ($head, $($tail),+)
        where
            $head: Exhaustive + Clone,
            $($tail: Exhaustive + Clone),+
        {
            #[allow(non_snake_case)]
            fn enumerate() -> Vec<Self> {
                let mut out = Vec::new();
                for head in <$head>::enumerate() {
                    for ($($tail,)+) in <($($tail,)+)>::enumerate() {
                        out.push((head.clone(), $($tail),+));
                    }
                }
                out
            }

            fn cardinality() -> Cardinality {
                <$head>::cardinality() * <($($tail,)+)>::cardinality()
            }
        }
    };
}

tuple_exhaustive!(A, B);
tuple_exhaustive!(A, B, C);
tuple_exhaustive!(A, B, C, D);

cfg_if::cfg_if! {
    if #[cfg(feature = "large_tuples")] {
        tuple_exhaustive!(A, B, C, D, E);
        tuple_exhaustive!(A, B, C, D, E, F);
        tuple_exhaustive!(A, B, C, D, E, F, G);
        tuple_exhaustive!(A, B, C, D, E, F, G, H);
    }
}

impl<T: Exhaustive + Clone, const N: usize> Exhaustive for [T; N] {
    /// Odometer over the element enumeration, rightmost index ticking
    /// fastest.
    fn enumerate() -> Vec<Self> {
        if N == 0 {
            // The empty array is a value even when T is uninhabited.
            return vec![std::array::from_fn(|_| unreachable!())];
        }
        let base = T::enumerate();
        if base.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut odometer = [0usize; N];
        loop {
            out.push(std::array::from_fn(|i| base[odometer[i]].clone()));
            let mut pos = N;
            loop {
                if pos == 0 {
                    return out;
                }
                pos -= 1;
                odometer[pos] += 1;
                if odometer[pos] < base.len() {
                    break;
                }
                odometer[pos] = 0;
            }
        }
    }

    /// `|T|^N`, as an N-fold product so the arithmetic stays unbounded.
    fn cardinality() -> Cardinality {
        std::iter::repeat(T::cardinality()).take(N).product()
    }
}

#[cfg(test)]
mod test {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn option_puts_none_first() {
        assert_eq!(
            vec![None, Some(false), Some(true)],
            <Option<bool>>::enumerate()
        );
        assert_eq!(Cardinality::from(3u8), <Option<bool>>::cardinality());
        // Nesting composes: 1 + (1 + 2)
        assert_eq!(Cardinality::from(4u8), <Option<Option<bool>>>::cardinality());
    }

    #[test]
    fn result_puts_ok_before_err() {
        assert_eq!(
            vec![Ok(false), Ok(true), Err(())],
            <Result<bool, ()>>::enumerate()
        );
        assert_eq!(Cardinality::from(2u8), <Result<bool, Infallible>>::cardinality());
        // sum of the alternative counts: 2 + 3
        assert_eq!(
            Cardinality::from(5u8),
            <Result<bool, std::cmp::Ordering>>::cardinality()
        );
    }

    #[test]
    fn pair_last_position_varies_fastest() {
        use std::cmp::Ordering::{self, *};
        let pairs = <(bool, Ordering)>::enumerate();
        assert_eq!(
            vec![
                (false, Less),
                (false, Equal),
                (false, Greater),
                (true, Less),
                (true, Equal),
                (true, Greater),
            ],
            pairs
        );
        assert_eq!(Cardinality::from(6u8), <(bool, Ordering)>::cardinality());
    }

    #[test]
    fn triple_cardinality_composes() {
        assert_eq!(Cardinality::from(8u8), <(bool, bool, bool)>::cardinality());
        assert_eq!(8, <(bool, bool, bool)>::enumerate().len());
    }

    #[test]
    fn array_order_matches_nested_tuples() {
        assert_eq!(
            vec![[false, false], [false, true], [true, false], [true, true]],
            <[bool; 2]>::enumerate()
        );
    }

    #[test]
    fn empty_array_is_single_valued_even_over_void() {
        assert_eq!(1, <[bool; 0]>::enumerate().len());
        assert_eq!(Cardinality::one(), <[Infallible; 0]>::cardinality());
        assert_eq!(1, <[Infallible; 0]>::enumerate().len());
        assert!(<[Infallible; 2]>::enumerate().is_empty());
    }

    #[test]
    fn array_cardinality_is_exact_beyond_native_width() {
        // 2^70 overflows u64; the closed form must not.
        assert_eq!(
            Cardinality::pow2(&Cardinality::from(70u8)),
            <[bool; 70]>::cardinality()
        );
    }

    #[test]
    fn boxed_values_track_the_pointee() {
        assert_eq!(vec![Box::new(false), Box::new(true)], <Box<bool>>::enumerate());
        assert_eq!(bool::cardinality(), <Box<bool>>::cardinality());
    }
}
