//! Property-based tests for the history core.
//!
//! These tests use proptest to verify the reorder/time-travel invariants
//! hold across many randomly generated inputs.

use proptest::prelude::*;
use rewind::{History, HistoryError, Post};

fn seeded_list(len: usize) -> History<Post> {
    let posts = (1..=len as u64)
        .map(|id| Post::new(id, format!("post {id}")))
        .collect();
    History::new().seed(posts)
}

fn id_multiset(entries: &[Post]) -> Vec<u64> {
    let mut ids: Vec<u64> = entries.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids
}

prop_compose! {
    // A history built by replaying a random sequence of valid swaps.
    fn arbitrary_history()(
        len in 2usize..8,
        swaps in prop::collection::vec((0usize..8, 0usize..8), 0..12),
    ) -> History<Post> {
        let mut history = seeded_list(len);
        for (a, b) in swaps {
            if let Ok(next) = history.reorder(a % len, b % len) {
                history = next;
            }
        }
        history
    }
}

proptest! {
    #[test]
    fn reorder_grows_past_by_exactly_one(
        history in arbitrary_history(),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let len = history.present().len();
        let (a, b) = (a % len, b % len);
        prop_assume!(a != b);

        let next = history.reorder(a, b).unwrap();
        prop_assert_eq!(next.past().len(), history.past().len() + 1);
    }

    #[test]
    fn reorder_preserves_the_id_multiset(
        history in arbitrary_history(),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let len = history.present().len();
        let next = history.reorder(a % len, b % len).unwrap();

        prop_assert_eq!(id_multiset(next.present()), id_multiset(history.present()));
    }

    #[test]
    fn double_swap_is_self_inverse_on_present(
        history in arbitrary_history(),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let len = history.present().len();
        let (a, b) = (a % len, b % len);
        prop_assume!(a != b);

        let round_trip = history.reorder(a, b).unwrap().reorder(b, a).unwrap();

        prop_assert_eq!(round_trip.present(), history.present());
        // Present is restored but both swaps stay recorded
        prop_assert_eq!(round_trip.past().len(), history.past().len() + 2);
    }

    #[test]
    fn time_travel_truncates_and_restores_exactly(
        history in arbitrary_history(),
        target in 0usize..12,
    ) {
        prop_assume!(history.has_history());
        let target = target % history.past().len();

        let restored_index = history.past().len() - 1 - target;
        let expected = history.past()[restored_index].clone();

        let travelled = history.time_travel(target).unwrap();

        prop_assert_eq!(travelled.past().len(), history.past().len() - target - 1);
        prop_assert_eq!(travelled.present(), expected.as_slice());
        prop_assert_eq!(travelled.past(), &history.past()[..restored_index]);
    }

    #[test]
    fn one_description_per_recorded_action(history in arbitrary_history()) {
        // Every reachable past entry comes from a real swap, so each
        // consecutive snapshot pair differs and yields one description.
        prop_assert_eq!(history.moves().count(), history.past().len());
    }

    #[test]
    fn descriptions_mention_positions_within_bounds(history in arbitrary_history()) {
        let len = history.present().len();
        for record in history.moves() {
            prop_assert!(record.from_index < len);
            prop_assert!(record.to_index < len);
            prop_assert_ne!(record.from_index, record.to_index);
        }
    }

    #[test]
    fn out_of_range_reorder_is_rejected_and_harmless(
        history in arbitrary_history(),
        a in 0usize..8,
    ) {
        let len = history.present().len();
        let before = history.clone();

        let err = history.reorder(a % len, len).unwrap_err();

        prop_assert_eq!(err, HistoryError::IndexOutOfRange { index: len, len });
        prop_assert_eq!(history, before);
    }

    #[test]
    fn out_of_range_time_travel_is_rejected_and_harmless(history in arbitrary_history()) {
        let before = history.clone();
        let target = history.past().len();

        let err = history.time_travel(target).unwrap_err();

        prop_assert_eq!(err, HistoryError::IndexOutOfRange { index: target, len: target });
        prop_assert_eq!(history, before);
    }

    #[test]
    fn history_roundtrips_through_json(history in arbitrary_history()) {
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History<Post> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(history, deserialized);
    }
}
