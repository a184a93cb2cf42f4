//! Guarded enumeration
//!
//! Full materialization is safe for the types this crate is designed
//! around, but nothing in the type system stops a caller from composing a
//! legal, finite type whose enumeration is nonetheless enormous
//! (`(u16, u16)` has over four billion values). The two guards here keep
//! such requests from running away:
//!
//!   * [`enumerate_below`] consults the closed-form cardinality *before*
//!     allocating anything and refuses when the count is not strictly under
//!     the caller's ceiling;
//!   * [`enumerate_within`] races the materialization against a wall-clock
//!     deadline on a helper thread, returning `None` on a miss.
//!
//! The cardinality guard is the preferred one: it is deterministic and
//! costs one big-integer comparison. The deadline guard exists for types
//! whose cardinality is acceptable but whose values are expensive to build.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::card::Cardinality;
use crate::error::{DeadlineError, SizeError};
use crate::exhaust::Exhaustive;

/// Outcome of a cardinality-guarded enumeration request.
///
/// Either the full value sequence together with its (already verified)
/// cardinality, or a refusal recording both the ceiling and the actual
/// count that breached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundedEnumeration<T> {
    /// The type fit under the ceiling and was materialized in full.
    Enumerated {
        /// Closed-form count, equal to `values.len()`.
        cardinality: Cardinality,
        /// The complete ordered enumeration.
        values: Vec<T>,
    },
    /// The type's cardinality reached the ceiling; nothing was allocated.
    Rejected {
        /// Exclusive bound the caller asked to stay under.
        ceiling: Cardinality,
        /// Actual cardinality of the refused type.
        cardinality: Cardinality,
    },
}

impl<T> BoundedEnumeration<T> {
    /// Cardinality of the requested type, available in both outcomes.
    #[must_use]
    pub fn cardinality(&self) -> &Cardinality {
        match self {
            Self::Enumerated { cardinality, .. } | Self::Rejected { cardinality, .. } => {
                cardinality
            }
        }
    }

    /// Returns `true` if the request was refused.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Extracts the value sequence, or `None` on refusal.
    #[must_use]
    pub fn into_values(self) -> Option<Vec<T>> {
        match self {
            Self::Enumerated { values, .. } => Some(values),
            Self::Rejected { .. } => None,
        }
    }

    /// Converts the outcome into a `Result`, mapping refusal to
    /// [`SizeError`].
    pub fn into_result(self) -> Result<Vec<T>, SizeError> {
        match self {
            Self::Enumerated { values, .. } => Ok(values),
            Self::Rejected {
                ceiling,
                cardinality,
            } => Err(SizeError {
                ceiling,
                cardinality,
            }),
        }
    }
}

/// Materializes the enumeration of `T` only if its cardinality is strictly
/// below `ceiling`.
///
/// The check runs entirely on the closed-form count, so a refusal performs
/// no per-value work at all. The bound is exclusive: a type whose count
/// equals the ceiling exactly is refused.
#[must_use]
pub fn enumerate_below<T: Exhaustive>(ceiling: Cardinality) -> BoundedEnumeration<T> {
    let cardinality = T::cardinality();
    if cardinality < ceiling {
        BoundedEnumeration::Enumerated {
            cardinality,
            values: T::enumerate(),
        }
    } else {
        BoundedEnumeration::Rejected {
            ceiling,
            cardinality,
        }
    }
}

/// Materializes the enumeration of `T`, giving up after `deadline` of
/// wall-clock time.
///
/// The enumeration runs on a helper thread. On a miss the helper is
/// abandoned, not killed: it may keep computing until its sender drops into
/// a closed channel, but the caller regains control at the deadline. A
/// deadline of zero always misses (except for the degenerate case where the
/// helper wins the race outright).
#[must_use]
pub fn enumerate_within<T>(deadline: Duration) -> Option<Vec<T>>
where
    T: Exhaustive + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone already; nothing to do about it.
        let _ = tx.send(T::enumerate());
    });
    rx.recv_timeout(deadline).ok()
}

/// Variant of [`enumerate_within`] that reports a miss as a
/// [`DeadlineError`] carrying the elapsed budget.
pub fn try_enumerate_within<T>(deadline: Duration) -> Result<Vec<T>, DeadlineError>
where
    T: Exhaustive + Send + 'static,
{
    enumerate_within(deadline).ok_or(DeadlineError { deadline })
}
