use super::*;

#[test]
fn new_set_is_hidden() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert!(!set.is_complete());
    assert!(!set.is_revealed(0));
}

#[test]
fn empty_set_is_complete() {
    let set = RevealSet::new(0);
    assert!(set.is_empty());
    assert!(set.is_complete());
}

#[test]
fn reveal_reports_first_time_only() {
    let mut set = RevealSet::new(2);
    assert!(set.reveal(1, RevealTrigger::Observer));
    assert!(!set.reveal(1, RevealTrigger::Observer));
    assert!(!set.reveal(1, RevealTrigger::Fallback));
    assert_eq!(set.revealed_by(1), Some(RevealTrigger::Observer));
}

#[test]
fn reveal_out_of_range_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(!set.reveal(5, RevealTrigger::Observer));
    assert_eq!(set.revealed_by(5), None);
}

#[test]
fn fallback_after_observer_reveals_the_rest() {
    let mut set = RevealSet::new(4);
    set.reveal(0, RevealTrigger::Observer);
    set.reveal(2, RevealTrigger::Observer);

    assert_eq!(set.reveal_all(RevealTrigger::Fallback), 2);
    assert!(set.is_complete());
    assert_eq!(set.revealed_by(0), Some(RevealTrigger::Observer));
    assert_eq!(set.revealed_by(1), Some(RevealTrigger::Fallback));
}

#[test]
fn observer_after_fallback_changes_nothing() {
    let mut set = RevealSet::new(2);
    assert_eq!(set.reveal_all(RevealTrigger::Fallback), 2);
    let snapshot = set.clone();
    assert!(!set.reveal(0, RevealTrigger::Observer));
    assert_eq!(set.reveal_all(RevealTrigger::Fallback), 0);
    assert_eq!(set, snapshot);
}
