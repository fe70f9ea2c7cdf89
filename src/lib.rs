//! Rewind: history-tracked ordered lists with time travel
//!
//! Rewind keeps an ordered list (the **present**) together with the
//! snapshots it held before each reorder (the **past**). From those
//! snapshots it derives a human-readable action log, newest first, and any
//! recorded ordering can be restored on demand - restoring discards the
//! restored snapshot and everything newer.
//!
//! The core is built on the "pure core, imperative shell" philosophy:
//! every transition is a pure function producing a new immutable value,
//! the [`Store`] is the single mutable cell around it, and the one piece
//! of I/O (fetching seed data) is isolated behind an effect boundary in
//! [`seed`].
//!
//! # Core Concepts
//!
//! - **Entry**: item identity via the [`Entry`] trait
//! - **History**: present/past snapshot tracking with reorder and time travel
//! - **Moves**: derived, newest-first descriptions of recorded reorders
//! - **Store**: caller-owned dispatch shell around the pure reducer
//!
//! # Example
//!
//! ```rust
//! use rewind::{Action, Post, Store};
//!
//! let mut store = Store::new();
//! store
//!     .dispatch(Action::Seed(vec![
//!         Post::new(1, "sunt aut facere"),
//!         Post::new(2, "qui est esse"),
//!         Post::new(3, "ea molestias"),
//!     ]))
//!     .unwrap();
//!
//! // "move item down" on the first row
//! store
//!     .dispatch(Action::Reorder { index_a: 0, index_b: 1 })
//!     .unwrap();
//! assert_eq!(
//!     store.descriptions().collect::<Vec<_>>(),
//!     vec!["moved post 1 from index 0 to index 1"]
//! );
//!
//! // undo it
//! store
//!     .dispatch(Action::TimeTravel { steps_back: 0 })
//!     .unwrap();
//! assert!(!store.has_history());
//! ```

pub mod core;
pub mod post;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use core::{Entry, History, HistoryError, MoveRecord, Moves};
pub use post::Post;
pub use store::{reduce, Action, Store, StoreMetadata};
