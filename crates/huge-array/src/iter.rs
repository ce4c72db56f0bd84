//! Lazy iterators over array contents.

use std::iter::FusedIterator;
use std::slice;

use crate::cursor::HugeCursor;
use crate::page::PAGE_SHIFT;

/// Values of an array in index order.
///
/// Built on a [`HugeCursor`], so it walks segment by segment and reads each
/// value only when it is yielded.
#[derive(Clone, Debug)]
pub struct Values<'a> {
    cursor: HugeCursor<'a>,
    position: usize,
    remaining: usize,
}

impl<'a> Values<'a> {
    pub(crate) fn new(cursor: HugeCursor<'a>, len: usize) -> Self {
        let position = cursor.offset;
        Self {
            cursor,
            position,
            remaining: len,
        }
    }
}

impl Iterator for Values<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        loop {
            if self.position < self.cursor.limit {
                let value = self.cursor.array[self.position];
                self.position += 1;
                self.remaining -= 1;
                return Some(value);
            }
            if !self.cursor.advance() {
                return None;
            }
            self.position = self.cursor.offset;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

/// Backing segments of an array in order, each paired with the global index
/// of its first slot.
///
/// For a paged array every item is one page: a unit of work that shares no
/// slot with any other item.
#[derive(Clone, Debug)]
pub struct Pages<'a> {
    inner: std::iter::Enumerate<slice::Iter<'a, Vec<i64>>>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(segments: &'a [Vec<i64>]) -> Self {
        Self {
            inner: segments.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = (usize, &'a [i64]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, segment)| (index << PAGE_SHIFT, segment.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Pages<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(index, segment)| (index << PAGE_SHIFT, segment.as_slice()))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PAGE_SIZE;

    #[test]
    fn values_concatenate_segments() {
        let segments = vec![vec![1; PAGE_SIZE], vec![2, 3]];
        let mut cursor = HugeCursor::new();
        cursor.reseed(&segments, 0, PAGE_SIZE - 1);
        let values: Vec<i64> = Values::new(cursor, 3).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn values_report_exact_len() {
        let segments = vec![vec![0; 5]];
        let mut cursor = HugeCursor::new();
        cursor.reseed(&segments, 0, 1);
        let mut values = Values::new(cursor, 4);
        assert_eq!(values.len(), 4);
        values.next();
        assert_eq!(values.len(), 3);
        assert_eq!(values.by_ref().count(), 3);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn pages_carry_base_indices() {
        let segments = vec![vec![0; PAGE_SIZE], vec![0; PAGE_SIZE], vec![0; 4]];
        let bases: Vec<usize> = Pages::new(&segments).map(|(base, _)| base).collect();
        assert_eq!(bases, vec![0, PAGE_SIZE, 2 * PAGE_SIZE]);
        let (base, last) = Pages::new(&segments).next_back().unwrap();
        assert_eq!(base, 2 * PAGE_SIZE);
        assert_eq!(last.len(), 4);
    }
}
