//! Derived action descriptions.
//!
//! The action log is a pure projection over the recorded snapshots - it is
//! recomputed on every read, never stored, so it cannot diverge from the
//! history it describes.

use super::entry::Entry;
use super::history::History;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded reorder, derived from two consecutive snapshots.
///
/// `from_index` is the moved entry's position in the earlier snapshot,
/// `to_index` its position in the later one. Rendered via `Display` as
/// `moved post {id} from index {from} to index {to}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub entry_id: u64,
    pub from_index: usize,
    pub to_index: usize,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moved post {} from index {} to index {}",
            self.entry_id, self.from_index, self.to_index
        )
    }
}

/// Lazy iterator over recorded moves, newest first.
///
/// Each snapshot in the past is compared against its successor (the present,
/// for the newest snapshot). A pairwise swap makes the two swapped entries
/// cross over, so the moved entry is the first one, scanning by position,
/// whose id differs between the two snapshots. Identical consecutive
/// snapshots yield nothing.
///
/// The iterator borrows the history, so it is restartable: call
/// [`History::moves`] again for a fresh pass.
pub struct Moves<'a, P: Entry> {
    history: &'a History<P>,
    // Pairs left to inspect; pair i compares past[i] against its successor.
    remaining: usize,
}

impl<'a, P: Entry> Moves<'a, P> {
    pub(crate) fn new(history: &'a History<P>) -> Self {
        Self {
            history,
            remaining: history.past().len(),
        }
    }
}

impl<P: Entry> Iterator for Moves<'_, P> {
    type Item = MoveRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let past = self.history.past();
        while self.remaining > 0 {
            self.remaining -= 1;
            let i = self.remaining;
            let earlier = &past[i];
            let later = if i + 1 == past.len() {
                self.history.present()
            } else {
                past[i + 1].as_slice()
            };
            if let Some(record) = diff_snapshots(earlier, later) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Identical snapshot pairs are skipped, so only the upper bound is known.
        (0, Some(self.remaining))
    }
}

/// Locate the single moved entry between two snapshots of the same id set.
fn diff_snapshots<P: Entry>(earlier: &[P], later: &[P]) -> Option<MoveRecord> {
    let (from_index, moved) = earlier
        .iter()
        .enumerate()
        .find(|(i, entry)| later.get(*i).map_or(true, |l| l.id() != entry.id()))?;
    let to_index = later.iter().position(|l| l.id() == moved.id())?;
    Some(MoveRecord {
        entry_id: moved.id(),
        from_index,
        to_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Post;

    fn seeded() -> History<Post> {
        History::new().seed(vec![
            Post::new(1, "one"),
            Post::new(2, "two"),
            Post::new(3, "three"),
            Post::new(4, "four"),
            Post::new(5, "five"),
        ])
    }

    #[test]
    fn empty_past_yields_nothing() {
        let history = seeded();
        assert_eq!(history.moves().count(), 0);
    }

    #[test]
    fn one_record_per_reorder_newest_first() {
        let history = seeded().reorder(0, 1).unwrap().reorder(3, 4).unwrap();

        let records: Vec<MoveRecord> = history.moves().collect();
        assert_eq!(
            records,
            vec![
                MoveRecord {
                    entry_id: 4,
                    from_index: 3,
                    to_index: 4
                },
                MoveRecord {
                    entry_id: 1,
                    from_index: 0,
                    to_index: 1
                },
            ]
        );
    }

    #[test]
    fn non_adjacent_swap_reports_the_first_mismatch() {
        let history = seeded().reorder(1, 4).unwrap();

        let records: Vec<MoveRecord> = history.moves().collect();
        assert_eq!(
            records,
            vec![MoveRecord {
                entry_id: 2,
                from_index: 1,
                to_index: 4
            }]
        );
    }

    #[test]
    fn display_matches_the_action_log_format() {
        let record = MoveRecord {
            entry_id: 1,
            from_index: 0,
            to_index: 1,
        };
        assert_eq!(record.to_string(), "moved post 1 from index 0 to index 1");
    }

    #[test]
    fn iterator_is_restartable() {
        let history = seeded().reorder(0, 1).unwrap();

        let first_pass: Vec<MoveRecord> = history.moves().collect();
        let second_pass: Vec<MoveRecord> = history.moves().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn identical_consecutive_snapshots_are_skipped() {
        // Not reachable through the public transitions, so build the shape
        // through serde: past holds two identical snapshots before a swap.
        let json = r#"{
            "present": [{"id": 2, "title": "two"}, {"id": 1, "title": "one"}],
            "past": [
                [{"id": 1, "title": "one"}, {"id": 2, "title": "two"}],
                [{"id": 1, "title": "one"}, {"id": 2, "title": "two"}]
            ]
        }"#;
        let history: History<Post> = serde_json::from_str(json).unwrap();

        let records: Vec<MoveRecord> = history.moves().collect();
        assert_eq!(
            records,
            vec![MoveRecord {
                entry_id: 1,
                from_index: 0,
                to_index: 1
            }]
        );
    }

    #[test]
    fn size_hint_bounds_the_remaining_pairs() {
        let history = seeded().reorder(0, 1).unwrap().reorder(1, 2).unwrap();

        let mut moves = history.moves();
        assert_eq!(moves.size_hint(), (0, Some(2)));
        moves.next();
        assert_eq!(moves.size_hint(), (0, Some(1)));
    }
}
