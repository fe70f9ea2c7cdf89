//! Imperative shell around the pure history core.
//!
//! The [`Store`] is the explicit, caller-owned replacement for the reference
//! system's ambient application context: it holds the current [`History`],
//! applies [`Action`]s through the pure [`reduce`] function, and exposes the
//! read views the UI renders from.

use crate::core::{Entry, History, HistoryError, Moves};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transition request against the history core.
///
/// The enum is closed, so an unrecognized operation kind cannot be
/// constructed and [`reduce`] is total over its inputs.
///
/// The UI input events map 1:1 onto variants: "move item up" is
/// `Reorder { index_a: i, index_b: i - 1 }`, "move item down" is
/// `Reorder { index_a: i, index_b: i + 1 }`, and "time travel to action N"
/// is `TimeTravel { steps_back: N }` (counted from the newest action as 0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Action<P: Entry> {
    /// Replace the present order wholesale and clear history.
    Seed(Vec<P>),
    /// Swap the entries at the two indices, recording the previous order.
    Reorder { index_a: usize, index_b: usize },
    /// Restore the order from `steps_back` actions ago, discarding newer
    /// history.
    TimeTravel { steps_back: usize },
}

impl<P: Entry> Action<P> {
    /// The action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seed(_) => "seed",
            Self::Reorder { .. } => "reorder",
            Self::TimeTravel { .. } => "time-travel",
        }
    }
}

/// Apply one action to a history, producing the next history.
///
/// This is a pure dispatch over the core transitions: deterministic, no
/// hidden state, and the input history is never mutated.
///
/// # Errors
///
/// Propagates [`HistoryError::IndexOutOfRange`] from `Reorder` and
/// `TimeTravel`; `Seed` cannot fail.
///
/// # Example
///
/// ```rust
/// use rewind::{reduce, Action, History, Post};
///
/// let state: History<Post> = History::new();
/// let state = reduce(&state, Action::Seed(vec![Post::new(1, "a"), Post::new(2, "b")])).unwrap();
/// let state = reduce(&state, Action::Reorder { index_a: 0, index_b: 1 }).unwrap();
///
/// assert_eq!(state.present()[0].id, 2);
/// assert!(state.has_history());
/// ```
pub fn reduce<P: Entry>(state: &History<P>, action: Action<P>) -> Result<History<P>, HistoryError> {
    match action {
        Action::Seed(entries) => Ok(state.seed(entries)),
        Action::Reorder { index_a, index_b } => state.reorder(index_a, index_b),
        Action::TimeTravel { steps_back } => state.time_travel(steps_back),
    }
}

/// Metadata tracked alongside the state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last successful transition time
    pub updated_at: DateTime<Utc>,

    /// Number of actions applied so far (including seeds)
    pub actions_applied: usize,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            actions_applied: 0,
        }
    }
}

/// Owns the current history and applies actions to it.
///
/// Transitions run one at a time to completion; a rejected action leaves
/// the held state untouched. The store is the only mutable cell in the
/// system - everything it holds is replaced atomically, never edited in
/// place.
///
/// # Example
///
/// ```rust
/// use rewind::{Action, Post, Store};
///
/// let mut store = Store::new();
/// store
///     .dispatch(Action::Seed(vec![Post::new(1, "a"), Post::new(2, "b")]))
///     .unwrap();
/// store
///     .dispatch(Action::Reorder { index_a: 0, index_b: 1 })
///     .unwrap();
///
/// assert_eq!(store.present()[0].id, 2);
/// assert_eq!(store.descriptions().count(), 1);
/// ```
pub struct Store<P: Entry> {
    state: History<P>,
    metadata: StoreMetadata,
}

impl<P: Entry> Default for Store<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Entry> Store<P> {
    /// Create a store holding an empty history.
    pub fn new() -> Self {
        Self {
            state: History::new(),
            metadata: StoreMetadata::default(),
        }
    }

    /// Apply an action, replacing the held state with the reduced one.
    ///
    /// # Errors
    ///
    /// Propagates the core's [`HistoryError`]; on error the held state and
    /// metadata are unchanged.
    pub fn dispatch(&mut self, action: Action<P>) -> Result<(), HistoryError> {
        let name = action.name();
        let next = reduce(&self.state, action)?;
        self.state = next;
        self.metadata.updated_at = Utc::now();
        self.metadata.actions_applied += 1;
        tracing::debug!(
            action = name,
            entries = self.state.present().len(),
            recorded = self.state.past().len(),
            "applied action"
        );
        Ok(())
    }

    /// The full current state (pure read).
    pub fn state(&self) -> &History<P> {
        &self.state
    }

    /// The live list for rendering.
    pub fn present(&self) -> &[P] {
        self.state.present()
    }

    /// Whether the action-log panel should be shown at all.
    pub fn has_history(&self) -> bool {
        self.state.has_history()
    }

    /// Recorded moves, newest first.
    pub fn moves(&self) -> Moves<'_, P> {
        self.state.moves()
    }

    /// Human-readable action log, newest first.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.state.descriptions()
    }

    /// Store metadata (pure read).
    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }
}
