//! The [`HugeLongArray`] facade.
//!
//! A `HugeLongArray` is a fixed-size sequence of `i64` backed by exactly one
//! of two representations, chosen at construction and never changed:
//!
//! ```text
//! HugeLongArray
//! ├── Storage::Single → SingleLongArray (one Vec<i64> of `size` slots)
//! ├── Storage::Paged  → PagedLongArray  (Vec<Vec<i64>>, PAGE_SIZE per page)
//! └── SharedTracker   (told once at construction, once at release)
//! ```
//!
//! Element accessors dispatch on the representation. Cursors and iterators
//! do not: both representations expose their storage as a slice of segments.

use std::fmt;
use std::sync::Arc;

use log::debug;

use huge_core::{HugeArrayError, SharedTracker, MAX_ARRAY_LENGTH};

use crate::cursor::{HugeCursor, HugeCursorMut};
use crate::iter::{Pages, Values};
use crate::paged::PagedLongArray;
use crate::single::SingleLongArray;

/// Backing representation of a [`HugeLongArray`].
#[derive(Clone, Debug, PartialEq, Eq)]
enum Storage {
    Single(SingleLongArray),
    Paged(PagedLongArray),
}

/// Fixed-size array of `i64` values that may exceed a single allocation.
///
/// # Accounting
///
/// Construction reports the array's byte footprint to the tracker before
/// allocating; [`release`](Self::release) reports the same byte count back.
/// Dropping an array without releasing it skips the second report.
pub struct HugeLongArray {
    storage: Storage,
    tracker: SharedTracker,
}

macro_rules! dispatch {
    ($self:expr, $array:ident => $body:expr) => {
        match $self {
            Storage::Single($array) => $body,
            Storage::Paged($array) => $body,
        }
    };
}

impl HugeLongArray {
    /// Allocate a zeroed array of `size` elements, picking the single-segment
    /// variant up to [`MAX_ARRAY_LENGTH`] and the paged variant beyond it.
    pub fn new_array(size: usize, tracker: &SharedTracker) -> Result<Self, HugeArrayError> {
        if size <= MAX_ARRAY_LENGTH {
            Self::new_single_array(size, tracker)
        } else {
            Self::new_paged_array(size, tracker)
        }
    }

    /// Allocate a zeroed single-segment array.
    ///
    /// Fails with [`HugeArrayError::InvalidSize`] past [`MAX_ARRAY_LENGTH`].
    pub fn new_single_array(size: usize, tracker: &SharedTracker) -> Result<Self, HugeArrayError> {
        SingleLongArray::check_size(size)?;
        let bytes = SingleLongArray::memory_estimation(size);
        tracker.add(bytes)?;
        let storage = Storage::Single(SingleLongArray::new(size)?);
        debug!("allocated single huge array: size={size}, bytes={bytes}");
        Ok(Self {
            storage,
            tracker: Arc::clone(tracker),
        })
    }

    /// Allocate a zeroed paged array.
    pub fn new_paged_array(size: usize, tracker: &SharedTracker) -> Result<Self, HugeArrayError> {
        PagedLongArray::check_size(size)?;
        let bytes = PagedLongArray::memory_estimation(size);
        tracker.add(bytes)?;
        let storage = Storage::Paged(PagedLongArray::new(size)?);
        debug!("allocated paged huge array: size={size}, bytes={bytes}");
        Ok(Self {
            storage,
            tracker: Arc::clone(tracker),
        })
    }

    /// Build an array holding a copy of `values`.
    pub fn of(values: &[i64], tracker: &SharedTracker) -> Result<Self, HugeArrayError> {
        let mut array = Self::new_array(values.len(), tracker)?;
        let mut cursor = array.cursor_mut(0);
        let mut source = values;
        while cursor.advance() {
            let segment = cursor.segment_mut();
            let (head, rest) = source.split_at(segment.len());
            segment.copy_from_slice(head);
            source = rest;
        }
        Ok(array)
    }

    /// Bytes [`new_array`](Self::new_array) would reserve for `size`
    /// elements.
    pub const fn memory_estimation(size: usize) -> usize {
        if size <= MAX_ARRAY_LENGTH {
            SingleLongArray::memory_estimation(size)
        } else {
            PagedLongArray::memory_estimation(size)
        }
    }

    /// Element count, fixed at construction.
    #[inline]
    pub fn size(&self) -> usize {
        dispatch!(&self.storage, a => a.size())
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether the paged representation backs this array.
    pub fn is_paged(&self) -> bool {
        matches!(self.storage, Storage::Paged(_))
    }

    /// Bytes held by the backing storage, headers included.
    pub fn memory_bytes(&self) -> usize {
        dispatch!(&self.storage, a => a.memory_bytes())
    }

    /// Value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i64, HugeArrayError> {
        dispatch!(&self.storage, a => a.get(index))
    }

    /// Store `value` at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), HugeArrayError> {
        dispatch!(&mut self.storage, a => a.set(index, value))
    }

    /// Bitwise-or `mask` into the value at `index`.
    #[inline]
    pub fn or(&mut self, index: usize, mask: i64) -> Result<(), HugeArrayError> {
        dispatch!(&mut self.storage, a => a.or(index, mask))
    }

    /// Add `delta` to the value at `index`, wrapping on overflow.
    #[inline]
    pub fn add_to(&mut self, index: usize, delta: i64) -> Result<(), HugeArrayError> {
        dispatch!(&mut self.storage, a => a.add_to(index, delta))
    }

    /// Assign `f(i)` to every index `i`. `f` runs exactly once per index,
    /// in ascending order.
    pub fn set_all<F>(&mut self, f: F)
    where
        F: FnMut(usize) -> i64,
    {
        dispatch!(&mut self.storage, a => a.set_all(f))
    }

    /// Assign `value` to every slot.
    pub fn fill(&mut self, value: i64) {
        dispatch!(&mut self.storage, a => a.fill(value))
    }

    /// Lazy iterator over the values in index order.
    ///
    /// Values are read as they are yielded, not when the iterator is built.
    pub fn iter(&self) -> Values<'_> {
        let mut cursor = HugeCursor::new();
        self.cursor(0, &mut cursor);
        Values::new(cursor, self.size())
    }

    /// Backing segments in order with their base indices. One item for a
    /// single-segment array, one per page for a paged array.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self.segments())
    }

    /// Copy the contents into a new `Vec`.
    pub fn to_vec(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.size());
        for (_, segment) in self.pages() {
            out.extend_from_slice(segment);
        }
        out
    }

    /// Copy the first `min(length, self.size(), dest.size())` values into
    /// `dest` and reset the rest of `dest` to zero.
    pub fn copy_to(&self, dest: &mut HugeLongArray, length: usize) {
        let length = length.min(self.size()).min(dest.size());
        let mut values = self.iter().take(length);
        let mut cursor = dest.cursor_mut(0);
        while cursor.advance() {
            for slot in cursor.segment_mut() {
                *slot = values.next().unwrap_or(0);
            }
        }
    }

    /// An unbound cursor for use with [`cursor`](Self::cursor).
    pub fn new_cursor(&self) -> HugeCursor<'_> {
        HugeCursor::new()
    }

    /// Reseed `cursor` to walk this array from global index `from` to the
    /// end. `from` past the end is clamped to `size()`.
    ///
    /// Single-segment arrays expose `[from, size)` in one advance; paged
    /// arrays expose one page per advance, the first starting at `from`.
    pub fn cursor<'a, 'c>(
        &'a self,
        from: usize,
        cursor: &'c mut HugeCursor<'a>,
    ) -> &'c mut HugeCursor<'a> {
        let (segment, offset) = dispatch!(&self.storage, a => a.cursor_start(from));
        cursor.reseed(self.segments(), segment, offset);
        cursor
    }

    /// A write cursor walking this array from global index `from`.
    pub fn cursor_mut(&mut self, from: usize) -> HugeCursorMut<'_> {
        let (segment, offset) = dispatch!(&self.storage, a => a.cursor_start(from));
        HugeCursorMut::seeded(self.segments_mut(), segment, offset)
    }

    /// Discard the backing storage and report the freed bytes to the
    /// tracker. Returns the byte count reported.
    pub fn release(self) -> Result<usize, HugeArrayError> {
        let paged = self.is_paged();
        let bytes = dispatch!(self.storage, a => a.release());
        self.tracker.remove(bytes)?;
        debug!("released huge array: paged={paged}, bytes={bytes}");
        Ok(bytes)
    }

    pub(crate) fn segments(&self) -> &[Vec<i64>] {
        dispatch!(&self.storage, a => a.segments())
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Vec<i64>] {
        dispatch!(&mut self.storage, a => a.segments_mut())
    }
}

impl fmt::Debug for HugeLongArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HugeLongArray")
            .field("paged", &self.is_paged())
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a HugeLongArray {
    type Item = i64;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PAGE_SIZE;
    use huge_core::{AllocationTracker, CountingTracker, TrackerError};

    fn empty() -> SharedTracker {
        <dyn AllocationTracker>::empty()
    }

    fn both(size: usize) -> [HugeLongArray; 2] {
        let tracker = empty();
        [
            HugeLongArray::new_single_array(size, &tracker).unwrap(),
            HugeLongArray::new_paged_array(size, &tracker).unwrap(),
        ]
    }

    #[test]
    fn new_array_prefers_single_up_to_ceiling() {
        let array = HugeLongArray::new_array(10, &empty()).unwrap();
        assert!(!array.is_paged());
        assert_eq!(
            HugeLongArray::memory_estimation(MAX_ARRAY_LENGTH + 1),
            PagedLongArray::memory_estimation(MAX_ARRAY_LENGTH + 1)
        );
    }

    #[test]
    fn single_array_past_ceiling_is_invalid() {
        let err = HugeLongArray::new_single_array(MAX_ARRAY_LENGTH + 1, &empty()).unwrap_err();
        assert!(matches!(err, HugeArrayError::InvalidSize { .. }));
    }

    #[test]
    fn accessors_behave_identically_on_both_variants() {
        for mut array in both(10) {
            array.set(5, 1337).unwrap();
            array.or(5, 42).unwrap();
            assert_eq!(array.get(5).unwrap(), 1337 | 42);
            array.add_to(5, 3).unwrap();
            assert_eq!(array.get(5).unwrap(), (1337 | 42) + 3);
            assert!(array.get(10).is_err());
            assert_eq!(array.size(), 10);
        }
    }

    #[test]
    fn iter_is_lazy_and_restartable() {
        for mut array in both(5) {
            array.set_all(|i| i as i64 * 10);
            let first: Vec<i64> = array.iter().collect();
            let second: Vec<i64> = (&array).into_iter().collect();
            assert_eq!(first, vec![0, 10, 20, 30, 40]);
            assert_eq!(first, second);
            array.fill(1);
            assert_eq!(array.iter().sum::<i64>(), 5);
        }
    }

    #[test]
    fn of_copies_values() {
        let values: Vec<i64> = (0..(PAGE_SIZE as i64 + 5)).collect();
        let tracker = empty();
        let array = HugeLongArray::of(&values, &tracker).unwrap();
        assert_eq!(array.to_vec(), values);
    }

    #[test]
    fn copy_to_truncates_and_zero_fills() {
        let tracker = empty();
        let source = HugeLongArray::of(&[1, 2, 3, 4], &tracker).unwrap();
        let mut dest = HugeLongArray::new_paged_array(6, &tracker).unwrap();
        dest.fill(9);
        source.copy_to(&mut dest, 3);
        assert_eq!(dest.to_vec(), vec![1, 2, 3, 0, 0, 0]);

        let mut short = HugeLongArray::new_single_array(2, &tracker).unwrap();
        source.copy_to(&mut short, 100);
        assert_eq!(short.to_vec(), vec![1, 2]);
    }

    #[test]
    fn construction_and_release_report_matching_bytes() {
        let counting = Arc::new(CountingTracker::new());
        let tracker: SharedTracker = counting.clone();
        let array = HugeLongArray::new_paged_array(40_000, &tracker).unwrap();
        let reserved = counting.current();
        assert_eq!(reserved, PagedLongArray::memory_estimation(40_000));
        assert_eq!(array.memory_bytes(), reserved);
        let freed = array.release().unwrap();
        assert_eq!(freed, reserved);
        assert_eq!(counting.current(), 0);
    }

    #[test]
    fn tracker_refusal_propagates_unchanged() {
        let tracker: SharedTracker = Arc::new(CountingTracker::with_budget(64));
        let err = HugeLongArray::new_single_array(100, &tracker).unwrap_err();
        assert_eq!(
            err,
            HugeArrayError::Tracker(TrackerError::BudgetExceeded {
                requested: 100 * 8 + 16,
                available: 64,
            })
        );
    }

    #[test]
    fn debug_shows_variant_and_size() {
        let array = HugeLongArray::new_paged_array(3, &empty()).unwrap();
        let text = format!("{array:?}");
        assert!(text.contains("paged: true"));
        assert!(text.contains("size: 3"));
    }
}
