//! Allocation accounting: what trackers see at construction and release.

use huge_array::{HugeLongArray, PagedLongArray, PAGE_SIZE};
use huge_core::memory::{size_of_long_array, BYTES_PER_LONG};
use huge_core::{CountingTracker, HugeArrayError, SharedTracker, TrackerError, MAX_ARRAY_LENGTH};
use huge_test_utils::{init_test_logging, FailingTracker, RecordingTracker, TrackerEvent, Variant};
use std::sync::Arc;

#[test]
fn single_release_reports_payload_plus_header() {
    init_test_logging();
    let (recorder, tracker) = RecordingTracker::shared();
    let array = Variant::Single.build(15, &tracker);
    let freed = array.release().unwrap();

    assert!(freed >= 15 * BYTES_PER_LONG);
    assert_eq!(freed, size_of_long_array(15));
    assert_eq!(
        recorder.events(),
        vec![TrackerEvent::Reserved(freed), TrackerEvent::Released(freed)]
    );
}

#[test]
fn paged_release_sums_pages() {
    let (recorder, tracker) = RecordingTracker::shared();
    let size = 2 * PAGE_SIZE + 100;
    let array = Variant::Paged.build(size, &tracker);
    let freed = array.release().unwrap();

    let expected = 2 * size_of_long_array(PAGE_SIZE) + size_of_long_array(100);
    assert_eq!(freed, expected);
    assert!(freed >= size * BYTES_PER_LONG);
    assert_eq!(recorder.released(), expected);
    assert_eq!(recorder.reserved(), expected);
}

#[test]
fn tracker_called_once_each_way() {
    let (recorder, tracker) = RecordingTracker::shared();
    let mut array = Variant::Paged.build(1_000, &tracker);
    array.fill(3);
    array.set_all(|i| i as i64);
    array.set(5, 1).unwrap();
    let _ = array.iter().sum::<i64>();
    assert_eq!(recorder.events().len(), 1);
    array.release().unwrap();
    assert_eq!(recorder.events().len(), 2);
}

#[test]
fn counting_tracker_returns_to_zero() {
    let counting = Arc::new(CountingTracker::new());
    let tracker: SharedTracker = counting.clone();
    let arrays: Vec<HugeLongArray> = (0..4)
        .map(|i| HugeLongArray::new_array(1_000 * (i + 1), &tracker).unwrap())
        .collect();
    assert!(counting.current() > 0);
    for array in arrays {
        array.release().unwrap();
    }
    assert_eq!(counting.current(), 0);
}

#[test]
fn budget_refusal_allocates_nothing() {
    let counting = Arc::new(CountingTracker::with_budget(PagedLongArray::memory_estimation(PAGE_SIZE)));
    let tracker: SharedTracker = counting.clone();
    let err = HugeLongArray::new_paged_array(PAGE_SIZE + 1, &tracker).unwrap_err();
    assert!(matches!(
        err,
        HugeArrayError::Tracker(TrackerError::BudgetExceeded { .. })
    ));
    assert_eq!(counting.current(), 0);

    // Exactly one page fits.
    let array = HugeLongArray::new_paged_array(PAGE_SIZE, &tracker).unwrap();
    assert_eq!(counting.current(), counting.budget().unwrap());
    array.release().unwrap();
}

#[test]
fn failing_tracker_error_is_passed_through() {
    let tracker = FailingTracker::shared("accounting offline");
    let err = HugeLongArray::new_single_array(10, &tracker).unwrap_err();
    assert_eq!(
        err,
        HugeArrayError::Tracker(TrackerError::Failed {
            reason: "accounting offline".into(),
        })
    );
    assert_eq!(
        std::error::Error::source(&err).map(|e| e.to_string()),
        Some("tracker failed: accounting offline".to_string())
    );
}

#[test]
fn invalid_single_size_checked_before_tracking() {
    let (recorder, tracker) = RecordingTracker::shared();
    let err = HugeLongArray::new_single_array(MAX_ARRAY_LENGTH + 1, &tracker).unwrap_err();
    assert_eq!(
        err,
        HugeArrayError::InvalidSize {
            requested: MAX_ARRAY_LENGTH + 1,
            max: MAX_ARRAY_LENGTH,
        }
    );
    assert!(recorder.events().is_empty());
}

#[test]
fn estimation_matches_reservation() {
    for size in [0, 1, 10, PAGE_SIZE, 3 * PAGE_SIZE + 1] {
        let (recorder, tracker) = RecordingTracker::shared();
        let array = HugeLongArray::new_array(size, &tracker).unwrap();
        assert_eq!(recorder.reserved(), HugeLongArray::memory_estimation(size));
        assert_eq!(array.memory_bytes(), recorder.reserved());
    }
}
