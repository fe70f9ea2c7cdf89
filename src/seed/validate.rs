//! Seed payload validation using Validation.
//!
//! Checks accumulate ALL violations instead of stopping at the first one,
//! so a bad payload is reported in a single pass.

use crate::core::Entry;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Violations a seed payload can carry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedViolation {
    /// Two or more entries share an id; identity must be unique per snapshot
    #[error("duplicate entry id {id}")]
    DuplicateId { id: u64 },
}

/// Check that entry ids are unique within the payload.
///
/// Returns `Validation::Success(())` when every id is distinct. Otherwise
/// returns `Validation::Failure` carrying one violation per duplicated id
/// (each duplicated id reported once, ascending).
pub fn unique_ids<P: Entry>(entries: &[P]) -> Validation<(), NonEmptyVec<SeedViolation>> {
    let mut seen = BTreeSet::new();
    let mut duplicated = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.id()) {
            duplicated.insert(entry.id());
        }
    }

    let checks: Vec<Validation<(), NonEmptyVec<SeedViolation>>> = duplicated
        .into_iter()
        .map(|id| Validation::fail(SeedViolation::DuplicateId { id }))
        .collect();

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
