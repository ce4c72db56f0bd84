//! Paged backing: an ordered list of fixed-capacity pages.
//!
//! Every page holds [`PAGE_SIZE`] slots except the last, which holds
//! [`last_page_length`] slots. Pages are allocated up front and never grow,
//! split or move, so page `p` always covers global indices
//! `[p * PAGE_SIZE, p * PAGE_SIZE + page.len())`.

use huge_core::memory::{size_of_long_array, MAX_PAGED_LENGTH};
use huge_core::HugeArrayError;

use crate::page::{
    global_index, index_in_page, last_page_length, page_count, page_index, page_length,
    PAGE_SIZE,
};

/// Huge array backed by [`PAGE_SIZE`]-element pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedLongArray {
    pages: Vec<Vec<i64>>,
    size: usize,
}

impl PagedLongArray {
    /// Bytes a paged array of `size` elements reserves: every page's
    /// payload plus one header per page.
    pub const fn memory_estimation(size: usize) -> usize {
        let pages = page_count(size);
        if pages == 0 {
            return 0;
        }
        (pages - 1) * size_of_long_array(PAGE_SIZE) + size_of_long_array(last_page_length(size))
    }

    /// Check `size` against the paged ceiling without allocating.
    pub fn check_size(size: usize) -> Result<(), HugeArrayError> {
        if size > MAX_PAGED_LENGTH {
            return Err(HugeArrayError::InvalidSize {
                requested: size,
                max: MAX_PAGED_LENGTH,
            });
        }
        Ok(())
    }

    /// Allocate zeroed pages for `size` elements.
    pub fn new(size: usize) -> Result<Self, HugeArrayError> {
        Self::check_size(size)?;
        let pages = (0..page_count(size))
            .map(|page| vec![0; page_length(size, page)])
            .collect();
        Ok(Self { pages, size })
    }

    /// Element count.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Decompose `index` into `(page, offset)`, rejecting indices past `size`.
    #[inline]
    fn locate(&self, index: usize) -> Result<(usize, usize), HugeArrayError> {
        let page = page_index(index);
        let offset = index_in_page(index);
        if index >= self.size {
            return Err(HugeArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok((page, offset))
    }

    /// Value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i64, HugeArrayError> {
        let (page, offset) = self.locate(index)?;
        Ok(self.pages[page][offset])
    }

    /// Store `value` at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), HugeArrayError> {
        let (page, offset) = self.locate(index)?;
        self.pages[page][offset] = value;
        Ok(())
    }

    /// Bitwise-or `mask` into the value at `index`.
    #[inline]
    pub fn or(&mut self, index: usize, mask: i64) -> Result<(), HugeArrayError> {
        let (page, offset) = self.locate(index)?;
        self.pages[page][offset] |= mask;
        Ok(())
    }

    /// Add `delta` to the value at `index`, wrapping on overflow.
    #[inline]
    pub fn add_to(&mut self, index: usize, delta: i64) -> Result<(), HugeArrayError> {
        let (page, offset) = self.locate(index)?;
        let slot = &mut self.pages[page][offset];
        *slot = slot.wrapping_add(delta);
        Ok(())
    }

    /// Assign `f(i)` to every index `i`, page by page in ascending order.
    pub fn set_all<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> i64,
    {
        for (p, page) in self.pages.iter_mut().enumerate() {
            for (offset, slot) in page.iter_mut().enumerate() {
                *slot = f(global_index(p, offset));
            }
        }
    }

    /// Assign `value` to every slot.
    pub fn fill(&mut self, value: i64) {
        for page in &mut self.pages {
            page.fill(value);
        }
    }

    #[inline]
    pub(crate) fn segments(&self) -> &[Vec<i64>] {
        &self.pages
    }

    #[inline]
    pub(crate) fn segments_mut(&mut self) -> &mut [Vec<i64>] {
        &mut self.pages
    }

    /// Cursor start position for a walk from global index `from`.
    #[inline]
    pub(crate) fn cursor_start(&self, from: usize) -> (usize, usize) {
        let from = from.min(self.size);
        (page_index(from), index_in_page(from))
    }

    /// Bytes held by all pages, headers included.
    pub fn memory_bytes(&self) -> usize {
        self.pages.iter().map(|p| size_of_long_array(p.len())).sum()
    }

    /// Drop every page, returning the bytes they held.
    pub fn release(self) -> usize {
        self.memory_bytes()
    }
}
