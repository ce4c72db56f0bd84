//! Error types for huge arrays.
//!
//! Organised by subsystem: [`TrackerError`] for the allocation-accounting
//! collaborator and [`HugeArrayError`] for array construction and access.
//! All of them are programmer errors surfaced immediately; nothing here is
//! retried or recovered internally.

use std::error::Error;
use std::fmt;

/// Errors reported by an [`AllocationTracker`](crate::tracker::AllocationTracker).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerError {
    /// A reservation would push the tracked total past the tracker's budget.
    BudgetExceeded {
        /// Bytes requested by this reservation.
        requested: usize,
        /// Bytes still available under the budget.
        available: usize,
    },
    /// A release is larger than the bytes currently tracked.
    Underflow {
        /// Bytes the caller tried to release.
        released: usize,
        /// Bytes currently tracked.
        tracked: usize,
    },
    /// Any other failure inside a tracker implementation.
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "allocation budget exceeded: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::Underflow { released, tracked } => {
                write!(
                    f,
                    "released {released} bytes but only {tracked} bytes are tracked"
                )
            }
            Self::Failed { reason } => write!(f, "tracker failed: {reason}"),
        }
    }
}

impl Error for TrackerError {}

/// Errors from constructing or accessing a huge array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HugeArrayError {
    /// An accessor was called with an index outside `[0, size)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The array's element count.
        size: usize,
    },
    /// The requested size cannot be backed by the requested variant.
    InvalidSize {
        /// The requested element count.
        requested: usize,
        /// The largest element count the variant accepts.
        max: usize,
    },
    /// The allocation tracker refused to record a reservation or release.
    /// The tracker's own error is carried unchanged.
    Tracker(TrackerError),
}

impl fmt::Display for HugeArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for array of size {size}")
            }
            Self::InvalidSize { requested, max } => {
                write!(f, "invalid array size {requested}: maximum is {max}")
            }
            Self::Tracker(e) => write!(f, "allocation tracking failed: {e}"),
        }
    }
}

impl Error for HugeArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tracker(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TrackerError> for HugeArrayError {
    fn from(e: TrackerError) -> Self {
        Self::Tracker(e)
    }
}
