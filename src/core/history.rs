//! Present/past state tracking for an ordered list.
//!
//! Provides immutable tracking of an ordered list as reorder actions are
//! applied, following functional programming principles: every transition
//! returns a new [`History`] value and never mutates a previously returned
//! one.

use super::describe::Moves;
use super::entry::Entry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by history transitions.
///
/// A rejected transition leaves the input state unchanged; indices are
/// normally derived from the list's own current length, so an out-of-range
/// index indicates a wiring error in the caller rather than a user-facing
/// condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// A reorder or time-travel index fell outside the current bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A history-tracked ordered list.
///
/// `present` is the currently displayed order; `past` holds the snapshots
/// `present` had immediately before each reorder, oldest first. Reordering
/// never adds or removes entries, so the id set is identical across
/// `present` and every `past` snapshot.
///
/// All transitions are pure - they return a new `History` rather than
/// mutating the existing one.
///
/// # Example
///
/// ```rust
/// use rewind::{History, Post};
///
/// let history: History<Post> = History::new().seed(vec![
///     Post::new(1, "first"),
///     Post::new(2, "second"),
///     Post::new(3, "third"),
/// ]);
///
/// let history = history.reorder(0, 1).unwrap();
/// assert_eq!(history.present()[0].id, 2);
/// assert_eq!(history.past().len(), 1);
///
/// let history = history.time_travel(0).unwrap();
/// assert_eq!(history.present()[0].id, 1);
/// assert!(!history.has_history());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<P: Entry> {
    present: Vec<P>,
    past: Vec<Vec<P>>,
}

impl<P: Entry> Default for History<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Entry> History<P> {
    /// Create a new empty history: no entries, no recorded actions.
    pub fn new() -> Self {
        Self {
            present: Vec::new(),
            past: Vec::new(),
        }
    }

    /// Replace the present order wholesale and clear all recorded history.
    ///
    /// Establishing initial data is not a trackable action, so nothing is
    /// pushed to the past. Seeding an already-populated history acts as a
    /// reset and discards everything recorded so far.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::{History, Post};
    ///
    /// let history = History::new()
    ///     .seed(vec![Post::new(1, "a"), Post::new(2, "b")])
    ///     .reorder(0, 1)
    ///     .unwrap();
    /// assert!(history.has_history());
    ///
    /// let reseeded = history.seed(vec![Post::new(9, "fresh")]);
    /// assert_eq!(reseeded.present().len(), 1);
    /// assert!(!reseeded.has_history());
    /// ```
    pub fn seed(&self, entries: Vec<P>) -> Self {
        Self {
            present: entries,
            past: Vec::new(),
        }
    }

    /// Exchange the entries at `index_a` and `index_b`, recording the
    /// pre-swap order as the newest past snapshot.
    ///
    /// Any valid index pair is accepted; the swap is pairwise regardless
    /// of distance. The "move up"/"move down" UI events are the adjacent
    /// cases (`index_b = index_a - 1` and `index_b = index_a + 1`).
    /// Swapping an index with itself is an explicit no-op: the returned
    /// history equals the input and the past does not grow.
    ///
    /// This is a pure function - the input history is unchanged, including
    /// when the transition is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] when either index is not
    /// within `0..present.len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::{History, Post};
    ///
    /// let seeded = History::new().seed(vec![
    ///     Post::new(1, "a"),
    ///     Post::new(2, "b"),
    /// ]);
    ///
    /// let swapped = seeded.reorder(0, 1).unwrap();
    /// assert_eq!(swapped.present()[0].id, 2);
    /// // Original unchanged
    /// assert_eq!(seeded.present()[0].id, 1);
    /// ```
    pub fn reorder(&self, index_a: usize, index_b: usize) -> Result<Self, HistoryError> {
        let len = self.present.len();
        for index in [index_a, index_b] {
            if index >= len {
                return Err(HistoryError::IndexOutOfRange { index, len });
            }
        }
        if index_a == index_b {
            return Ok(self.clone());
        }

        let mut present = self.present.clone();
        present.swap(index_a, index_b);

        let mut past = self.past.clone();
        past.push(self.present.clone());

        Ok(Self { present, past })
    }

    /// Restore a past snapshot as the present order, discarding the
    /// restored snapshot and everything newer.
    ///
    /// `steps_back` counts from the newest recorded action as 0, so
    /// `time_travel(0)` undoes the most recent reorder. After time travel
    /// the newest `steps_back + 1` action descriptions vanish from
    /// [`moves`](History::moves).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] when `steps_back` is not
    /// within `0..past.len()`.
    pub fn time_travel(&self, steps_back: usize) -> Result<Self, HistoryError> {
        let len = self.past.len();
        if steps_back >= len {
            return Err(HistoryError::IndexOutOfRange {
                index: steps_back,
                len,
            });
        }
        let restored = len - 1 - steps_back;

        let mut past = self.past.clone();
        let present = past[restored].clone();
        past.truncate(restored);

        Ok(Self { present, past })
    }

    /// The currently displayed order.
    pub fn present(&self) -> &[P] {
        &self.present
    }

    /// All recorded snapshots, oldest first. `past[i]` is the order the
    /// present had immediately before the `(i+1)`-th reorder.
    pub fn past(&self) -> &[Vec<P>] {
        &self.past
    }

    /// Whether any reorder has been recorded. Controls whether the caller
    /// shows an action log at all.
    pub fn has_history(&self) -> bool {
        !self.past.is_empty()
    }

    /// Iterate over the recorded moves, newest first.
    ///
    /// The sequence is derived from consecutive snapshots on every call
    /// rather than stored, so it is always consistent with `past` and
    /// `present`. See [`Moves`] for the diffing rules.
    pub fn moves(&self) -> Moves<'_, P> {
        Moves::new(self)
    }

    /// Human-readable action log, newest first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::{History, Post};
    ///
    /// let history = History::new()
    ///     .seed(vec![Post::new(1, "a"), Post::new(2, "b")])
    ///     .reorder(0, 1)
    ///     .unwrap();
    ///
    /// let log: Vec<String> = history.descriptions().collect();
    /// assert_eq!(log, vec!["moved post 1 from index 0 to index 1"]);
    /// ```
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.moves().map(|record| record.to_string())
    }
}
