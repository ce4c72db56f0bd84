//! Array fixtures covering both backing variants.
//!
//! Most properties must hold for the single-segment and the paged variant
//! alike. [`both_variants`] builds one of each so a test can loop over them.

use huge_array::HugeLongArray;
use huge_core::{AllocationTracker, SharedTracker};

/// Which backing a fixture array uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Single,
    Paged,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Single, Variant::Paged];

    /// Build a zeroed array of this variant.
    pub fn build(self, size: usize, tracker: &SharedTracker) -> HugeLongArray {
        let array = match self {
            Variant::Single => HugeLongArray::new_single_array(size, tracker),
            Variant::Paged => HugeLongArray::new_paged_array(size, tracker),
        };
        array.unwrap_or_else(|e| panic!("failed to build {self:?} fixture of size {size}: {e}"))
    }
}

/// One array of each variant, both of `size` elements, untracked.
pub fn both_variants(size: usize) -> [(Variant, HugeLongArray); 2] {
    let tracker = <dyn AllocationTracker>::empty();
    Variant::ALL.map(|variant| (variant, variant.build(size, &tracker)))
}

/// An untracked array of `variant` with every slot set to `value`.
pub fn filled(variant: Variant, size: usize, value: i64) -> HugeLongArray {
    let mut array = variant.build(size, &<dyn AllocationTracker>::empty());
    array.fill(value);
    array
}
