//! Benchmark profiles for huge arrays.
//!
//! - [`reference_array`]: 1M elements, `value = index + 1`
//! - [`stress_array`]: 10M elements, paged
//! - [`access_pattern`]: deterministic pseudo-random index sequence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use huge_array::HugeLongArray;
use huge_core::{AllocationTracker, HugeArrayError};

/// Element count of the reference profile.
pub const REFERENCE_SIZE: usize = 1_000_000;

/// Element count of the stress profile.
pub const STRESS_SIZE: usize = 10_000_000;

/// Build an untracked array of `size` elements holding `index + 1`.
pub fn sequential_array(size: usize, paged: bool) -> Result<HugeLongArray, HugeArrayError> {
    let tracker = <dyn AllocationTracker>::empty();
    let mut array = if paged {
        HugeLongArray::new_paged_array(size, &tracker)?
    } else {
        HugeLongArray::new_single_array(size, &tracker)?
    };
    array.set_all(|i| i as i64 + 1);
    Ok(array)
}

/// Reference profile: 1M elements.
pub fn reference_array(paged: bool) -> Result<HugeLongArray, HugeArrayError> {
    sequential_array(REFERENCE_SIZE, paged)
}

/// Stress profile: 10M elements, paged.
pub fn stress_array() -> Result<HugeLongArray, HugeArrayError> {
    sequential_array(STRESS_SIZE, true)
}

/// `count` deterministic pseudo-random indices in `[0, size)`.
///
/// Returns an empty sequence when `size` is zero.
pub fn access_pattern(size: usize, count: usize) -> Vec<usize> {
    if size == 0 {
        return Vec::new();
    }
    (0..count as u64)
        .map(|i| {
            let mixed = i
                .wrapping_add(1)
                .wrapping_mul(6_364_136_223_846_793_005)
                .rotate_right(29);
            (mixed % size as u64) as usize
        })
        .collect()
}
