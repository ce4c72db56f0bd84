//! Core types for huge arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error types, the allocation-accounting interface and the memory
//! arithmetic shared by the array implementations in `huge-array`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod tracker;

pub use error::{HugeArrayError, TrackerError};
pub use memory::{size_of_long_array, MAX_ARRAY_LENGTH, MAX_PAGED_LENGTH};
pub use tracker::{AllocationTracker, CountingTracker, EmptyTracker, SharedTracker};
