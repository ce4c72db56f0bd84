//! Single-segment backing: one flat `Vec<i64>`.

use huge_core::memory::{size_of_long_array, MAX_ARRAY_LENGTH};
use huge_core::HugeArrayError;

/// Huge array backed by one contiguous block of `size` slots.
///
/// The fast path for arrays up to [`MAX_ARRAY_LENGTH`] elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleLongArray {
    /// Backing block. Always exactly `size` slots long.
    data: Vec<i64>,
}

impl SingleLongArray {
    /// Bytes a single-segment array of `size` elements reserves.
    pub const fn memory_estimation(size: usize) -> usize {
        size_of_long_array(size)
    }

    /// Check `size` against the single-block ceiling without allocating.
    pub fn check_size(size: usize) -> Result<(), HugeArrayError> {
        if size > MAX_ARRAY_LENGTH {
            return Err(HugeArrayError::InvalidSize {
                requested: size,
                max: MAX_ARRAY_LENGTH,
            });
        }
        Ok(())
    }

    /// Allocate a zeroed block of `size` slots.
    pub fn new(size: usize) -> Result<Self, HugeArrayError> {
        Self::check_size(size)?;
        Ok(Self {
            data: vec![0; size],
        })
    }

    /// Element count.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), HugeArrayError> {
        if index >= self.data.len() {
            return Err(HugeArrayError::IndexOutOfRange {
                index,
                size: self.data.len(),
            });
        }
        Ok(())
    }

    /// Value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i64, HugeArrayError> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Store `value` at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), HugeArrayError> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Bitwise-or `mask` into the value at `index`.
    #[inline]
    pub fn or(&mut self, index: usize, mask: i64) -> Result<(), HugeArrayError> {
        self.check_index(index)?;
        self.data[index] |= mask;
        Ok(())
    }

    /// Add `delta` to the value at `index`, wrapping on overflow.
    #[inline]
    pub fn add_to(&mut self, index: usize, delta: i64) -> Result<(), HugeArrayError> {
        self.check_index(index)?;
        self.data[index] = self.data[index].wrapping_add(delta);
        Ok(())
    }

    /// Assign `f(i)` to every index `i`, in ascending order.
    pub fn set_all<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> i64,
    {
        for (index, slot) in self.data.iter_mut().enumerate() {
            *slot = f(index);
        }
    }

    /// Assign `value` to every slot.
    pub fn fill(&mut self, value: i64) {
        self.data.fill(value);
    }

    /// The backing storage as a one-segment list.
    #[inline]
    pub(crate) fn segments(&self) -> &[Vec<i64>] {
        std::slice::from_ref(&self.data)
    }

    #[inline]
    pub(crate) fn segments_mut(&mut self) -> &mut [Vec<i64>] {
        std::slice::from_mut(&mut self.data)
    }

    /// Cursor start position for a walk from global index `from`.
    #[inline]
    pub(crate) fn cursor_start(&self, from: usize) -> (usize, usize) {
        (0, from.min(self.data.len()))
    }

    /// Bytes held by the backing block, header included.
    pub fn memory_bytes(&self) -> usize {
        Self::memory_estimation(self.data.len())
    }

    /// Drop the backing block, returning the bytes it held.
    pub fn release(self) -> usize {
        self.memory_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let array = SingleLongArray::new(10).unwrap();
        assert_eq!(array.size(), 10);
        assert!((0..10).all(|i| array.get(i).unwrap() == 0));
    }

    #[test]
    fn oversized_block_is_invalid() {
        let err = SingleLongArray::check_size(MAX_ARRAY_LENGTH + 1).unwrap_err();
        assert_eq!(
            err,
            HugeArrayError::InvalidSize {
                requested: MAX_ARRAY_LENGTH + 1,
                max: MAX_ARRAY_LENGTH,
            }
        );
        assert!(SingleLongArray::check_size(MAX_ARRAY_LENGTH).is_ok());
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let mut array = SingleLongArray::new(4).unwrap();
        let expected = HugeArrayError::IndexOutOfRange { index: 4, size: 4 };
        assert_eq!(array.get(4), Err(expected.clone()));
        assert_eq!(array.set(4, 1), Err(expected.clone()));
        assert_eq!(array.or(4, 1), Err(expected.clone()));
        assert_eq!(array.add_to(4, 1), Err(expected));
    }

    #[test]
    fn or_and_add_to_modify_in_place() {
        let mut array = SingleLongArray::new(10).unwrap();
        array.set(5, 1337).unwrap();
        array.or(5, 42).unwrap();
        assert_eq!(array.get(5).unwrap(), 1337 | 42);
        array.add_to(5, 3).unwrap();
        assert_eq!(array.get(5).unwrap(), (1337 | 42) + 3);
    }

    #[test]
    fn add_to_wraps() {
        let mut array = SingleLongArray::new(1).unwrap();
        array.set(0, i64::MAX).unwrap();
        array.add_to(0, 1).unwrap();
        assert_eq!(array.get(0).unwrap(), i64::MIN);
    }

    #[test]
    fn set_all_calls_each_index_once() {
        let mut array = SingleLongArray::new(20).unwrap();
        array.fill(-1);
        let mut calls = Vec::new();
        array.set_all(|i| {
            calls.push(i);
            1i64 << i
        });
        assert_eq!(calls, (0..20).collect::<Vec<_>>());
        for i in 0..20 {
            assert_eq!(array.get(i).unwrap(), 1i64 << i);
        }
    }

    #[test]
    fn cursor_start_clamps_to_size() {
        let array = SingleLongArray::new(150).unwrap();
        assert_eq!(array.cursor_start(30), (0, 30));
        assert_eq!(array.cursor_start(500), (0, 150));
    }

    #[test]
    fn release_reports_payload_plus_header() {
        let array = SingleLongArray::new(15).unwrap();
        assert_eq!(array.release(), 15 * 8 + 16);
    }
}
