use proptest::prelude::*;
use scrim::{ModalKey, ModalStack};

#[test]
fn new_stack_is_empty() {
    let stack = ModalStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert!(stack.top().is_none());
    assert!(stack.snapshot().is_empty());
}

#[test]
fn push_appends_to_top() {
    let mut stack = ModalStack::new();
    stack.push(ModalKey::from("a"));
    stack.push(ModalKey::from("b"));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.top().map(|e| e.key().as_str()), Some("b"));
}

#[test]
fn pop_is_lifo() {
    let mut stack = ModalStack::new();
    stack.push(ModalKey::from("a"));
    stack.push(ModalKey::from("b"));

    assert_eq!(stack.pop().map(|e| e.key().as_str().to_string()), Some("b".to_string()));
    assert_eq!(stack.pop().map(|e| e.key().as_str().to_string()), Some("a".to_string()));
    assert!(stack.pop().is_none());
}

#[test]
fn pop_on_empty_is_a_noop() {
    let mut stack = ModalStack::new();
    let revision = stack.revision();

    assert!(stack.pop().is_none());
    assert!(stack.is_empty());
    assert_eq!(stack.revision(), revision);
}

#[test]
fn snapshot_derives_depth_and_top() {
    let mut stack = ModalStack::new();
    stack.push(ModalKey::from("a"));
    stack.push(ModalKey::from("b"));

    let snapshot = stack.snapshot();
    let entries: Vec<_> = snapshot.entries().collect();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].key.as_str(), "a");
    assert_eq!(entries[0].depth, 1);
    assert!(!entries[0].is_top);

    assert_eq!(entries[1].key.as_str(), "b");
    assert_eq!(entries[1].depth, 0);
    assert!(entries[1].is_top);
}

#[test]
fn snapshot_top_regains_interactivity_after_pop() {
    let mut stack = ModalStack::new();
    stack.push(ModalKey::from("a"));
    stack.push(ModalKey::from("b"));
    stack.pop();

    let snapshot = stack.snapshot();
    let top = snapshot.top().expect("one entry left");
    assert_eq!(top.key.as_str(), "a");
    assert_eq!(top.depth, 0);
    assert!(top.is_top);
}

#[test]
fn repeated_push_of_one_key_yields_distinct_entries() {
    let mut stack = ModalStack::new();
    let first = stack.push(ModalKey::from("a"));
    let second = stack.push(ModalKey::from("a"));

    assert_ne!(first, second);
    assert_eq!(stack.len(), 2);

    let snapshot = stack.snapshot();
    let entries: Vec<_> = snapshot.entries().collect();
    assert!(entries.iter().all(|e| e.key.as_str() == "a"));
    assert_eq!(entries[0].depth, 1);
    assert_eq!(entries[1].depth, 0);
    assert_ne!(entries[0].sequence, entries[1].sequence);
}

#[test]
fn sequence_ids_increase_across_pops() {
    let mut stack = ModalStack::new();
    let first = stack.push(ModalKey::from("a"));
    stack.pop();
    let second = stack.push(ModalKey::from("a"));

    // The counter never resets, so reopened modals are distinguishable.
    assert!(second > first);
}

#[test]
fn clear_empties_unconditionally() {
    let mut stack = ModalStack::new();
    stack.push(ModalKey::from("a"));
    stack.push(ModalKey::from("b"));
    stack.push(ModalKey::from("c"));

    assert_eq!(stack.clear(), 3);
    assert!(stack.is_empty());
    assert_eq!(stack.clear(), 0);
}

#[test]
fn revision_tracks_content_changes_only() {
    let mut stack = ModalStack::new();
    let start = stack.revision();

    stack.push(ModalKey::from("a"));
    let after_push = stack.revision();
    assert!(after_push > start);

    stack.pop();
    let after_pop = stack.revision();
    assert!(after_pop > after_push);
    assert_eq!(stack.snapshot().revision(), after_pop);

    stack.pop();
    assert_eq!(stack.revision(), after_pop);

    assert_eq!(stack.clear(), 0);
    assert_eq!(stack.revision(), after_pop);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn length_tracks_push_pop_balance(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut stack = ModalStack::new();
        let mut expected = 0usize;
        for is_push in ops {
            if is_push {
                stack.push(ModalKey::from("a"));
                expected += 1;
            } else {
                stack.pop();
                expected = expected.saturating_sub(1);
            }
        }
        prop_assert_eq!(stack.len(), expected);
    }

    #[test]
    fn exactly_one_top_and_depths_descend(count in 1usize..16) {
        let mut stack = ModalStack::new();
        for i in 0..count {
            stack.push(ModalKey::from(format!("modal-{i}")));
        }

        let snapshot = stack.snapshot();
        prop_assert_eq!(snapshot.entries().filter(|e| e.is_top).count(), 1);
        prop_assert!(snapshot.top().expect("non-empty").is_top);
        for (index, entry) in snapshot.entries().enumerate() {
            prop_assert_eq!(entry.depth, count - 1 - index);
        }
    }
}
