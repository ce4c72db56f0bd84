//! Huge: fixed-size `i64` arrays that outgrow a single allocation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! huge sub-crates. For most users, adding `huge` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use huge::prelude::*;
//!
//! let counting = CountingTracker::new().into_shared();
//! let tracker: SharedTracker = counting.clone();
//!
//! // Past 2^14 elements a paged array spans several pages.
//! let mut degrees = HugeLongArray::new_paged_array(40_000, &tracker).unwrap();
//! degrees.set_all(|node| (node % 7) as i64);
//! degrees.add_to(39_999, 100).unwrap();
//!
//! // Walk the array page by page with a reusable cursor.
//! let mut cursor = degrees.new_cursor();
//! let cursor = degrees.cursor(0, &mut cursor);
//! let mut total = 0i64;
//! while cursor.advance() {
//!     total += cursor.array[cursor.offset..cursor.limit].iter().sum::<i64>();
//! }
//! assert_eq!(total, degrees.iter().sum::<i64>());
//!
//! assert_eq!(counting.current(), degrees.memory_bytes());
//! degrees.release().unwrap();
//! assert_eq!(counting.current(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `huge-array` | `HugeLongArray`, both backings, cursors, iterators, page-parallel helpers |
//! | [`types`] | `huge-core` | Errors, allocation tracking, memory arithmetic |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Array storage, cursors and page-parallel helpers (`huge-array`).
///
/// Most users only need [`array::HugeLongArray`] and
/// [`array::HugeCursor`]; both are also in the [`prelude`].
pub use huge_array as array;

/// Errors, allocation tracking and memory arithmetic (`huge-core`).
///
/// Implement [`types::AllocationTracker`] to route array footprints into
/// an external memory budget.
pub use huge_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use huge::prelude::*;
/// ```
pub mod prelude {
    // Arrays and cursors
    pub use huge_array::{HugeCursor, HugeCursorMut, HugeLongArray, PAGE_SIZE};

    // Page-parallel helpers
    pub use huge_array::{par_reduce, par_set_all, par_sum, ParallelConfig};

    // Tracking
    pub use huge_core::{AllocationTracker, CountingTracker, EmptyTracker, SharedTracker};

    // Errors
    pub use huge_core::{HugeArrayError, TrackerError};
}
