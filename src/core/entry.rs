//! Core Entry trait for list items.
//!
//! Anything tracked by a [`History`](super::History) implements this trait,
//! which provides pure accessors for identity and display without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for items held in a history-tracked list.
///
/// All methods are pure - no side effects. Entries are immutable values;
/// identity is by [`id`](Entry::id), which must be unique within any single
/// list snapshot. The same id may occupy different positions across
/// snapshots and denotes the same logical item.
///
/// # Required Traits
///
/// - `Clone`: entries must be cloneable for snapshot tracking
/// - `PartialEq`: entries must be comparable for snapshot diffing
/// - `Debug`: entries must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: entries must be serializable so whole
///   histories can round-trip through serde
///
/// # Example
///
/// ```rust
/// use rewind::core::Entry;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Note {
///     id: u64,
///     body: String,
/// }
///
/// impl Entry for Note {
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn label(&self) -> &str {
///         &self.body
///     }
/// }
/// ```
pub trait Entry:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable identity of the entry, unique within a single snapshot.
    fn id(&self) -> u64;

    /// Human-readable text for rendering the entry.
    fn label(&self) -> &str;
}
