//! Seed-data boundary: fetching, truncating, and validating the initial list.
//!
//! The core never performs I/O. Retrieving seed data is the one asynchronous
//! boundary in the system, and it is isolated here as an effect the caller
//! runs against its environment. While the fetch is in flight the store's
//! state is untouched; a failed fetch surfaces as a [`SeedError`] and never
//! reaches the core.

use crate::core::Entry;
use crate::post::Post;
use std::sync::Arc;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use stillwater::validation::Validation;
use thiserror::Error;

pub mod validate;

pub use validate::SeedViolation;

/// Number of records kept from a fetched payload.
pub const SEED_LIMIT: usize = 5;

/// Errors that can occur while obtaining seed data
#[derive(Debug, Error)]
pub enum SeedError {
    /// Retrieval failed (network or source error). Surfaced to the user;
    /// the caller clears its loading indicator and state stays unchanged.
    #[error("seed fetch failed: {0}")]
    Fetch(String),

    /// The payload was not the expected JSON shape
    #[error("seed payload could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload violated the seed invariants
    #[error("seed entries rejected: {}", format_violations(.violations))]
    Rejected { violations: Vec<SeedViolation> },
}

fn format_violations(violations: &[SeedViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for seed fetch factories.
/// These functions create fresh effects on each load attempt.
pub type SeedAction<P, Env> = Arc<dyn Fn() -> BoxedEffect<Vec<P>, SeedError, Env> + Send + Sync>;

/// Wraps a fetch effect and applies the payload policy.
///
/// The loader keeps the first [`SEED_LIMIT`] records of whatever the fetch
/// returns (the reference source pages far more than the list displays).
///
/// # Example
///
/// ```rust
/// use rewind::seed::{SeedAction, SeedLoader};
/// use rewind::Post;
/// use std::sync::Arc;
/// use stillwater::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let action: SeedAction<Post, ()> =
///     Arc::new(|| pure((1..=8).map(|id| Post::new(id, "post")).collect::<Vec<_>>()).boxed());
/// let loader = SeedLoader::new(action);
///
/// let posts = loader.load().run(&()).await.unwrap();
/// assert_eq!(posts.len(), 5);
/// # }
/// ```
pub struct SeedLoader<P: Entry + 'static, Env: Clone + Send + Sync + 'static> {
    action: SeedAction<P, Env>,
    limit: usize,
}

impl<P: Entry + 'static, Env: Clone + Send + Sync + 'static> SeedLoader<P, Env> {
    /// Create a loader with the default record limit.
    pub fn new(action: SeedAction<P, Env>) -> Self {
        Self {
            action,
            limit: SEED_LIMIT,
        }
    }

    /// Override how many records of the payload are kept.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch the payload and keep the first `limit` records.
    /// Returns impl Effect; run it against the caller's environment.
    pub fn load(&self) -> impl Effect<Output = Vec<P>, Error = SeedError, Env = Env> + '_ {
        let limit = self.limit;
        (self.action)()
            .map(move |mut entries| {
                entries.truncate(limit);
                entries
            })
            .boxed()
    }
}

/// Validate fetched entries before they become the seeded present.
///
/// # Errors
///
/// Returns [`SeedError::Rejected`] carrying every violation found (all
/// duplicated ids reported at once), leaving the caller's state untouched.
pub fn checked<P: Entry>(entries: Vec<P>) -> Result<Vec<P>, SeedError> {
    match validate::unique_ids(&entries) {
        Validation::Success(_) => Ok(entries),
        Validation::Failure(violations) => Err(SeedError::Rejected {
            violations: violations.iter().cloned().collect(),
        }),
    }
}

/// Parse the reference payload shape: a JSON array of objects carrying
/// `id` and `title` (or `text`).
pub fn parse_posts(payload: &str) -> Result<Vec<Post>, SeedError> {
    Ok(serde_json::from_str(payload)?)
}
