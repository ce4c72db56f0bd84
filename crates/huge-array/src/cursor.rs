//! Reusable segment cursors for bulk sequential access.
//!
//! A cursor walks an array one backing segment at a time. Each successful
//! [`advance`](HugeCursor::advance) rebinds the public `array`, `offset` and
//! `limit` fields to the next segment; callers scan `array[offset..limit]`
//! directly, so a full scan costs one call per page rather than one per
//! element.
//!
//! Both array variants hand the cursor their storage as a slice of segments
//! (one segment for the single variant, one per page for the paged variant),
//! so advancing never dispatches on the variant.
//!
//! ```text
//!  Unbound ──reseed──▶ Iterating ──advance (no segment left)──▶ Exhausted
//!                        ▲   │                                   │
//!                        └───┘ advance                           │
//!                        ▲                                       │
//!                        └──────────────── reseed ◀──────────────┘
//! ```

use crate::page::PAGE_SHIFT;

/// Read cursor over a huge array.
///
/// Created unbound by [`HugeLongArray::new_cursor`](crate::HugeLongArray::new_cursor)
/// and (re)seeded by [`HugeLongArray::cursor`](crate::HugeLongArray::cursor).
/// Reseeding rebinds the cursor in place; a cursor can walk many arrays and
/// many ranges without allocating.
///
/// Only `array[offset..limit]` belongs to the current walk. The segment
/// reference is rebound on every advance and must not be held across one.
#[derive(Clone, Debug, Default)]
pub struct HugeCursor<'a> {
    /// The currently exposed segment.
    pub array: &'a [i64],
    /// First valid position in `array` (inclusive).
    pub offset: usize,
    /// End of the valid positions in `array` (exclusive).
    pub limit: usize,
    base: usize,
    remaining: &'a [Vec<i64>],
    next_offset: usize,
    next_base: usize,
}

impl<'a> HugeCursor<'a> {
    /// An unbound cursor. Advancing it reports end-of-data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind to `segments`, starting at `first_offset` within
    /// `segments[first_segment]`.
    pub(crate) fn reseed(
        &mut self,
        segments: &'a [Vec<i64>],
        first_segment: usize,
        first_offset: usize,
    ) {
        self.array = &[];
        self.offset = 0;
        self.limit = 0;
        self.base = 0;
        self.remaining = segments.get(first_segment..).unwrap_or(&[]);
        self.next_offset = first_offset;
        self.next_base = first_segment << PAGE_SHIFT;
    }

    /// Expose the next segment.
    ///
    /// Returns `false` once every segment has been exposed. Exhaustion is
    /// permanent until the cursor is reseeded, and an exhausted advance
    /// leaves the exposed fields untouched.
    #[inline]
    pub fn advance(&mut self) -> bool {
        match self.remaining.split_first() {
            Some((segment, rest)) => {
                self.array = segment;
                self.offset = self.next_offset;
                self.limit = segment.len();
                self.base = self.next_base;
                self.remaining = rest;
                self.next_offset = 0;
                self.next_base += segment.len();
                true
            }
            None => false,
        }
    }

    /// The valid part of the current segment, `array[offset..limit]`.
    #[inline]
    pub fn segment(&self) -> &'a [i64] {
        &self.array[self.offset..self.limit]
    }

    /// Global index of `array[0]` in the current segment.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Global index of position `position` in the current segment.
    #[inline]
    pub fn global_index(&self, position: usize) -> usize {
        self.base + position
    }
}

/// Write cursor over a huge array.
///
/// Same walk as [`HugeCursor`], but each exposed segment is mutable. It holds
/// the array's exclusive borrow for its whole lifetime, so it is created per
/// walk by [`HugeLongArray::cursor_mut`](crate::HugeLongArray::cursor_mut)
/// rather than reseeded.
#[derive(Debug, Default)]
pub struct HugeCursorMut<'a> {
    /// The currently exposed segment.
    pub array: &'a mut [i64],
    /// First valid position in `array` (inclusive).
    pub offset: usize,
    /// End of the valid positions in `array` (exclusive).
    pub limit: usize,
    base: usize,
    remaining: &'a mut [Vec<i64>],
    next_offset: usize,
    next_base: usize,
}

impl<'a> HugeCursorMut<'a> {
    pub(crate) fn seeded(
        segments: &'a mut [Vec<i64>],
        first_segment: usize,
        first_offset: usize,
    ) -> Self {
        let remaining = match segments.get_mut(first_segment..) {
            Some(rest) => rest,
            None => &mut [],
        };
        Self {
            array: &mut [],
            offset: 0,
            limit: 0,
            base: 0,
            remaining,
            next_offset: first_offset,
            next_base: first_segment << PAGE_SHIFT,
        }
    }

    /// Expose the next segment. Same contract as [`HugeCursor::advance`].
    #[inline]
    pub fn advance(&mut self) -> bool {
        let remaining = std::mem::take(&mut self.remaining);
        match remaining.split_first_mut() {
            Some((segment, rest)) => {
                let len = segment.len();
                self.array = segment.as_mut_slice();
                self.offset = self.next_offset;
                self.limit = len;
                self.base = self.next_base;
                self.remaining = rest;
                self.next_offset = 0;
                self.next_base += len;
                true
            }
            None => false,
        }
    }

    /// The valid part of the current segment, `array[offset..limit]`.
    #[inline]
    pub fn segment_mut(&mut self) -> &mut [i64] {
        &mut self.array[self.offset..self.limit]
    }

    /// Global index of `array[0]` in the current segment.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }
}
