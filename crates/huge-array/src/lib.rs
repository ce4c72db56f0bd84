//! Huge long arrays for in-memory graph analytics.
//!
//! A [`HugeLongArray`] stores one `i64` per graph element at sizes that can
//! exceed what a single allocation should hold. It is backed either by one
//! flat block or by fixed-size pages, chosen once at construction.
//!
//! # Architecture
//!
//! ```text
//! HugeLongArray (facade, variant fixed at construction)
//! ├── SingleLongArray → Vec<i64>                    (≤ MAX_ARRAY_LENGTH)
//! ├── PagedLongArray  → Vec<Vec<i64>>, 2^14 per page
//! ├── HugeCursor / HugeCursorMut (zero-copy, one segment per advance)
//! ├── Values / Pages (lazy iterators built on the cursor)
//! └── parallel::{par_reduce, par_sum, par_set_all} (page-aligned work split)
//! ```
//!
//! # Bulk access
//!
//! Element accessors bounds-check and dispatch on the variant per call.
//! Scans should use a cursor instead, which exposes whole segments:
//!
//! ```
//! use huge_array::HugeLongArray;
//! use huge_core::AllocationTracker;
//!
//! let tracker = <dyn AllocationTracker>::empty();
//! let mut array = HugeLongArray::new_paged_array(40_000, &tracker).unwrap();
//! array.set_all(|i| i as i64 + 1);
//!
//! let mut cursor = array.new_cursor();
//! let mut sum = 0i64;
//! array.cursor(0, &mut cursor);
//! while cursor.advance() {
//!     sum += cursor.array[cursor.offset..cursor.limit].iter().sum::<i64>();
//! }
//! assert_eq!(sum, 40_000 * 40_001 / 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
pub mod iter;
pub mod page;
pub mod paged;
pub mod parallel;
pub mod single;

// Public re-exports for the primary API surface.
pub use array::HugeLongArray;
pub use config::ParallelConfig;
pub use cursor::{HugeCursor, HugeCursorMut};
pub use iter::{Pages, Values};
pub use page::{PAGE_SHIFT, PAGE_SIZE};
pub use paged::PagedLongArray;
pub use parallel::{par_reduce, par_set_all, par_sum};
pub use single::SingleLongArray;
