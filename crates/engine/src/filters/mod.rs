//! Filter implementations for the ranking pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod exclude_favorites;

// Re-export for convenience
pub use exclude_favorites::ExcludeFavoritesFilter;
