//! Core history-tracked list types and logic.
//!
//! This module contains the pure functional core:
//! - Item identity via the `Entry` trait
//! - Present/past snapshot tracking with reorder and time travel
//! - Derived, newest-first action descriptions
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod describe;
mod entry;
mod history;

pub use describe::{MoveRecord, Moves};
pub use entry::Entry;
pub use history::{History, HistoryError};
