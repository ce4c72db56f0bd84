//! Test utilities and mock trackers for huge-array development.
//!
//! Provides mock implementations of [`AllocationTracker`] that record or
//! refuse every call, plus [`fixtures`] that build both array variants for
//! the same scenario.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use huge_core::{AllocationTracker, SharedTracker, TrackerError};

pub use fixtures::{both_variants, filled, Variant};

/// One call observed by a [`RecordingTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    Reserved(usize),
    Released(usize),
}

/// Tracker that records every call in order and never fails.
///
/// Share it with [`RecordingTracker::shared`], hand the `SharedTracker` to
/// the code under test, and inspect [`events`](RecordingTracker::events).
#[derive(Debug, Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<TrackerEvent>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording tracker plus the same tracker as a `SharedTracker`.
    pub fn shared() -> (Arc<RecordingTracker>, SharedTracker) {
        let recorder = Arc::new(Self::new());
        let shared: SharedTracker = recorder.clone();
        (recorder, shared)
    }

    /// Every call so far, oldest first.
    pub fn events(&self) -> Vec<TrackerEvent> {
        self.lock().clone()
    }

    /// Sum of all reservations.
    pub fn reserved(&self) -> usize {
        self.lock()
            .iter()
            .map(|e| match e {
                TrackerEvent::Reserved(bytes) => *bytes,
                TrackerEvent::Released(_) => 0,
            })
            .sum()
    }

    /// Sum of all releases.
    pub fn released(&self) -> usize {
        self.lock()
            .iter()
            .map(|e| match e {
                TrackerEvent::Released(bytes) => *bytes,
                TrackerEvent::Reserved(_) => 0,
            })
            .sum()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TrackerEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AllocationTracker for RecordingTracker {
    fn add(&self, bytes: usize) -> Result<(), TrackerError> {
        self.lock().push(TrackerEvent::Reserved(bytes));
        Ok(())
    }

    fn remove(&self, bytes: usize) -> Result<(), TrackerError> {
        self.lock().push(TrackerEvent::Released(bytes));
        Ok(())
    }

    fn tracked(&self) -> Option<usize> {
        Some(self.reserved().saturating_sub(self.released()))
    }
}

/// Tracker that refuses every call with [`TrackerError::Failed`].
#[derive(Clone, Debug)]
pub struct FailingTracker {
    pub reason: String,
}

impl FailingTracker {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn shared(reason: impl Into<String>) -> SharedTracker {
        Arc::new(Self::new(reason))
    }

    fn error(&self) -> TrackerError {
        TrackerError::Failed {
            reason: self.reason.clone(),
        }
    }
}

impl AllocationTracker for FailingTracker {
    fn add(&self, _bytes: usize) -> Result<(), TrackerError> {
        Err(self.error())
    }

    fn remove(&self, _bytes: usize) -> Result<(), TrackerError> {
        Err(self.error())
    }
}

/// Install `env_logger` for the current test binary. Safe to call from
/// every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
