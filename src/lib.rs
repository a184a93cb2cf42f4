//! Model for exhaustive enumeration of finite discrete types
//!
//! # Overview
//!
//! This library provides a uniform way to materialize the complete list of
//! values of a type, together with an exact count of those values, for any
//! type that is finite and discrete. Rather than forcing end-users to write
//! bespoke enumeration logic for every struct and enum in their codebase,
//! `plenum` offers a centralized implementation of common types and traits
//! that allow for derivable enumeration based on a structurally inductive
//! paradigm: 'leaf' and 'composite' types form the core of each derived
//! enumeration, with ad-hoc types such as records, tuples, and algebraic
//! types supported via the `#[derive(Exhaustive)]` macro.
//!
//! The high-level trait [`Exhaustive`](crate::exhaust::Exhaustive) is the
//! keystone of the library. It defines two operations: `enumerate`, the
//! complete ordered sequence of a type's values, and `cardinality`, the
//! exact count of those values in the unbounded integer domain. The two are
//! bound by a law: the count always equals the sequence length, even when
//! the count is computed from a closed form without producing a single
//! value.
//!
//! A number of aspects of this library offer end-users the option to
//! hand-write implementors of the core traits: the adapter strategies of
//! [`prim`] cover atomic types with ordinal or successor structure, and the
//! [`shape`] module exposes the same generic representation the derive
//! macro targets, for types whose structure the macro cannot see.
//!
//! # Ordering and totality
//!
//! Every enumeration this crate produces is deterministic and structural:
//! constructors in declaration order, the last field varying fastest, sums
//! before their right alternatives, subsets in lexicographic order. Types
//! too large to ever enumerate (`u32` and wider, `String`, `Vec`) are
//! deliberately excluded at compile time via the
//! [`Inexhaustible`](crate::exhaust::Inexhaustible) marker, and the
//! [`guard`] module offers runtime ceilings and deadlines for the gray zone
//! of types that are legal but expensive.

extern crate exhaustive_derive;

pub mod card;
pub mod compound;
pub mod error;
pub mod exhaust;
pub mod guard;
pub mod powerset;
pub mod prim;
pub mod shape;

pub use crate::card::Cardinality;
pub use crate::error::{DeadlineError, SizeError};
pub use crate::exhaust::{cardinality, enumerate, Exhaustive, Inexhaustible};
pub use crate::guard::{
    enumerate_below, enumerate_within, try_enumerate_within, BoundedEnumeration,
};
pub use crate::prim::{
    ordinal_cardinality, ordinal_enumerate, successor_enumerate, Ordinal, Successor,
};
pub use crate::shape::{
    derive_cardinality, derive_enumeration, Labeled, Leaf, Product, Representable, ShapeLabel,
    Sum, UnitShape, VoidShape,
};

pub use ::exhaustive_derive::Exhaustive;
pub use ::lazy_static::lazy_static;
