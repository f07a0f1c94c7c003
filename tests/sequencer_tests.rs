use sitelog::core::sequencer::LocationSequencer;
use sitelog::errors::AppError;

#[test]
fn test_append_keeps_insertion_order() {
    let mut seq = LocationSequencer::new();
    seq.append(3).unwrap();
    seq.append(1).unwrap();
    seq.append(7).unwrap();

    assert_eq!(seq.ids(), &[3, 1, 7]);
    assert_eq!(seq.len(), 3);
}

#[test]
fn test_append_rejects_duplicate_without_changing_state() {
    let mut seq = LocationSequencer::new();
    seq.append(3).unwrap();
    seq.append(5).unwrap();

    let err = seq.append(3).unwrap_err();
    assert!(matches!(err, AppError::AlreadyInSequence(3)));

    // rejection leaves the sequence exactly as it was
    assert_eq!(seq.ids(), &[3, 5]);
}

#[test]
fn test_remove_is_idempotent() {
    let mut seq = LocationSequencer::new();
    seq.append(3).unwrap();
    seq.append(5).unwrap();
    seq.append(9).unwrap();

    seq.remove(5);
    assert_eq!(seq.ids(), &[3, 9]);

    // absent id: no-op, no panic
    seq.remove(5);
    seq.remove(42);
    assert_eq!(seq.ids(), &[3, 9]);
}

#[test]
fn test_validate_non_empty() {
    let mut seq = LocationSequencer::new();
    assert!(matches!(
        seq.validate_non_empty().unwrap_err(),
        AppError::EmptySequence
    ));
    assert!(seq.is_empty());

    seq.append(1).unwrap();
    assert!(seq.validate_non_empty().is_ok());

    seq.remove(1);
    assert!(seq.validate_non_empty().is_err());
}

#[test]
fn test_from_ids_deduplicates_keeping_first_occurrence() {
    let seq = LocationSequencer::from_ids(&[3, 5, 3, 7, 5]);
    assert_eq!(seq.ids(), &[3, 5, 7]);
}
