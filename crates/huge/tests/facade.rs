//! Exercises the public surface through the facade re-exports only.

use huge::prelude::*;
use huge_test_utils::{RecordingTracker, TrackerEvent};

#[test]
fn prelude_covers_allocate_walk_release() {
    let (recorder, tracker) = RecordingTracker::shared();
    let mut array = HugeLongArray::new_array(2 * PAGE_SIZE + 5, &tracker).unwrap();
    par_set_all(&mut array, &ParallelConfig::with_workers(2), |i| i as i64);

    let mut cursor = array.new_cursor();
    let cursor = array.cursor(PAGE_SIZE, &mut cursor);
    let mut seen = 0usize;
    while cursor.advance() {
        seen += cursor.limit - cursor.offset;
    }
    assert_eq!(seen, PAGE_SIZE + 5);

    let bytes = array.release().unwrap();
    assert_eq!(
        recorder.events(),
        vec![TrackerEvent::Reserved(bytes), TrackerEvent::Released(bytes)]
    );
}

#[test]
fn module_paths_reach_sub_crates() {
    let tracker = <dyn huge::types::AllocationTracker>::empty();
    let err = huge::array::SingleLongArray::check_size(huge::types::MAX_ARRAY_LENGTH + 1)
        .unwrap_err();
    assert!(matches!(err, HugeArrayError::InvalidSize { .. }));
    assert!(HugeLongArray::new_array(0, &tracker).unwrap().is_empty());
}
