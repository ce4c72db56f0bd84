//! Memory-usage arithmetic and platform length ceilings.
//!
//! Byte counts here are what an array reports to its
//! [`AllocationTracker`](crate::tracker::AllocationTracker): the raw payload
//! of every backing block plus a fixed per-block header.

/// Bytes per stored element.
pub const BYTES_PER_LONG: usize = std::mem::size_of::<i64>();

/// Fixed bookkeeping overhead charged for every backing block.
pub const BYTES_ARRAY_HEADER: usize = 16;

/// Block sizes are rounded up to this alignment.
pub const BYTES_ALIGNMENT: usize = 8;

/// Largest element count a single contiguous block may hold.
///
/// 2^28 elements (2 GiB) on 64-bit targets. Narrower targets are capped by
/// the largest allocation `Vec` can make.
pub const MAX_ARRAY_LENGTH: usize = if usize::BITS >= 64 {
    1 << 28
} else {
    isize::MAX as usize / BYTES_PER_LONG
};

/// Largest element count a paged array may hold: the total payload must stay
/// addressable as an `isize` byte count.
pub const MAX_PAGED_LENGTH: usize = isize::MAX as usize / BYTES_PER_LONG;

const _: () = assert!(MAX_ARRAY_LENGTH <= MAX_PAGED_LENGTH);

/// Round `bytes` up to [`BYTES_ALIGNMENT`].
pub const fn align_object_size(bytes: usize) -> usize {
    let mask = BYTES_ALIGNMENT - 1;
    bytes.saturating_add(mask) & !mask
}

/// Bytes charged for one block of `len` longs: payload plus header.
pub const fn size_of_long_array(len: usize) -> usize {
    align_object_size(
        BYTES_ARRAY_HEADER.saturating_add(len.saturating_mul(BYTES_PER_LONG)),
    )
}
