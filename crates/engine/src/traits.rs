//! Core traits for the ranking pipeline.
//!
//! This module defines the Filter trait that lets the engine drop scored
//! books before they are ranked.

use crate::preferences::Preferences;
use crate::types::ScoredBook;

/// Core trait for filtering scored books.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec and return a filtered Vec
/// - Filters must keep the relative order of the books they retain;
///   ranking relies on it to break ties by catalog order
/// - Filtering cannot fail: every input is a well-typed value
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of scored books.
    fn apply<'a>(
        &self,
        candidates: Vec<ScoredBook<'a>>,
        preferences: &Preferences,
    ) -> Vec<ScoredBook<'a>>;
}
