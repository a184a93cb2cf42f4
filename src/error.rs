//! Error types for the guarded enumeration layer
//!
//! The core [`Exhaustive`](crate::exhaust::Exhaustive) operations are total
//! and never fail. The guards in [`guard`](crate::guard) introduce the only
//! two failure modes the crate has: a type whose cardinality reaches the
//! caller's ceiling, and a materialization that outlives the caller's
//! deadline.

use std::fmt::{self, Display};
use std::time::Duration;

use crate::card::Cardinality;

/// Error case produced when a type's cardinality reaches or exceeds the
/// ceiling passed to [`enumerate_below`](crate::guard::enumerate_below).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeError {
    /// Exclusive bound the caller asked to stay under.
    pub ceiling: Cardinality,
    /// Actual cardinality of the rejected type.
    pub cardinality: Cardinality,
}

impl Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cardinality {} is not below the ceiling {}",
            self.cardinality, self.ceiling
        )
    }
}

impl std::error::Error for SizeError {}

/// Error case produced when materialization misses the deadline passed to
/// [`try_enumerate_within`](crate::guard::try_enumerate_within).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineError {
    /// Wall-clock budget that elapsed before the enumeration finished.
    pub deadline: Duration,
}

impl Display for DeadlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enumeration missed its {:?} deadline", self.deadline)
    }
}

impl std::error::Error for DeadlineError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_forms() {
        let size = SizeError {
            ceiling: Cardinality::from(100u8),
            cardinality: Cardinality::from(256u16),
        };
        assert_eq!(
            "cardinality 256 is not below the ceiling 100",
            size.to_string()
        );
        let deadline = DeadlineError {
            deadline: Duration::from_millis(5),
        };
        assert_eq!("enumeration missed its 5ms deadline", deadline.to_string());
    }
}
