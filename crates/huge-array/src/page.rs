//! Page geometry and index decomposition.
//!
//! A paged array splits its global index space into pages of
//! [`PAGE_SIZE`] elements. Because the page size is a power of two, a global
//! index decomposes into `(page, offset)` with one shift and one mask.
//! The geometry is fixed at build time.

/// log2 of [`PAGE_SIZE`].
pub const PAGE_SHIFT: u32 = 14;

/// Elements per page (16384).
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// Mask selecting the in-page offset of a global index.
pub const PAGE_MASK: usize = PAGE_SIZE - 1;

const _: () = assert!(PAGE_SIZE.is_power_of_two());

/// Page holding global index `index`.
#[inline]
pub const fn page_index(index: usize) -> usize {
    index >> PAGE_SHIFT
}

/// Offset of global index `index` within its page.
#[inline]
pub const fn index_in_page(index: usize) -> usize {
    index & PAGE_MASK
}

/// Global index of `offset` within `page`.
#[inline]
pub const fn global_index(page: usize, offset: usize) -> usize {
    (page << PAGE_SHIFT) | offset
}

/// Number of pages needed for `size` elements.
#[inline]
pub const fn page_count(size: usize) -> usize {
    size.div_ceil(PAGE_SIZE)
}

/// Length of the last page of a `size`-element array.
///
/// A full page when `size` is a positive multiple of [`PAGE_SIZE`],
/// zero only when `size == 0`.
#[inline]
pub const fn last_page_length(size: usize) -> usize {
    let pages = page_count(size);
    if pages == 0 {
        0
    } else {
        size - (pages - 1) * PAGE_SIZE
    }
}

/// Length of `page` in a `size`-element array; zero past the last page.
#[inline]
pub const fn page_length(size: usize, page: usize) -> usize {
    let pages = page_count(size);
    if page >= pages {
        0
    } else if page == pages - 1 {
        last_page_length(size)
    } else {
        PAGE_SIZE
    }
}
