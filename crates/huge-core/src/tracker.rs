//! Allocation accounting.
//!
//! An [`AllocationTracker`] is told how many bytes an array reserves when it
//! is built and how many it frees when it is released. Arrays hold the
//! tracker as a [`SharedTracker`] and call it exactly twice over their
//! lifetime, never on the access path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::TrackerError;

/// Accounting collaborator recording bytes reserved and released.
///
/// Errors returned here are passed through by arrays unchanged, wrapped in
/// [`HugeArrayError::Tracker`](crate::error::HugeArrayError::Tracker).
pub trait AllocationTracker: Send + Sync {
    /// Record `bytes` as reserved.
    fn add(&self, bytes: usize) -> Result<(), TrackerError>;

    /// Record `bytes` as released.
    fn remove(&self, bytes: usize) -> Result<(), TrackerError>;

    /// Net bytes currently tracked, if this tracker keeps a total.
    fn tracked(&self) -> Option<usize> {
        None
    }
}

/// Shared handle to a tracker, cloned into every array it accounts for.
pub type SharedTracker = Arc<dyn AllocationTracker>;

impl dyn AllocationTracker {
    /// A shared tracker that records nothing.
    pub fn empty() -> SharedTracker {
        Arc::new(EmptyTracker)
    }
}

/// Tracker that records nothing and never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyTracker;

impl AllocationTracker for EmptyTracker {
    fn add(&self, _bytes: usize) -> Result<(), TrackerError> {
        Ok(())
    }

    fn remove(&self, _bytes: usize) -> Result<(), TrackerError> {
        Ok(())
    }
}

/// Tracker keeping a net byte count, optionally under a budget.
///
/// Reservations past the budget are refused with
/// [`TrackerError::BudgetExceeded`] and leave the count unchanged.
#[derive(Debug, Default)]
pub struct CountingTracker {
    tracked: AtomicUsize,
    budget: Option<usize>,
}

impl CountingTracker {
    /// An unbounded counting tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// A counting tracker that refuses to track more than `budget` bytes.
    pub fn with_budget(budget: usize) -> Self {
        Self {
            tracked: AtomicUsize::new(0),
            budget: Some(budget),
        }
    }

    /// The configured budget, if any.
    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    /// Net bytes currently tracked.
    pub fn current(&self) -> usize {
        self.tracked.load(Ordering::Acquire)
    }

    /// Wrap this tracker in an `Arc` for sharing.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl AllocationTracker for CountingTracker {
    fn add(&self, bytes: usize) -> Result<(), TrackerError> {
        let limit = self.budget.unwrap_or(usize::MAX);
        self.tracked
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(bytes).filter(|&next| next <= limit)
            })
            .map(|_| ())
            .map_err(|current| TrackerError::BudgetExceeded {
                requested: bytes,
                available: limit.saturating_sub(current),
            })
    }

    fn remove(&self, bytes: usize) -> Result<(), TrackerError> {
        self.tracked
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(bytes)
            })
            .map(|_| ())
            .map_err(|tracked| TrackerError::Underflow {
                released: bytes,
                tracked,
            })
    }

    fn tracked(&self) -> Option<usize> {
        Some(self.current())
    }
}
