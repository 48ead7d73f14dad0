//! # Recommendation Engine
//!
//! Coordinates the ranking pipeline over a fixed catalog:
//! 1. Score every book against the preferences
//! 2. Apply filters (favorites are removed)
//! 3. Rank by score, keeping catalog order for ties
//! 4. Return the top N
//!
//! Search and the favorites view run over the same catalog. Every
//! operation is a pure function of the catalog and its arguments.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::ExcludeFavoritesFilter;
use crate::preferences::Preferences;
use crate::scoring::score_breakdown;
use crate::search::search_books;
use crate::types::ScoredBook;
use catalog::{Book, Catalog};

/// Number of recommendations returned when the caller does not choose
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks and searches the books of one catalog.
pub struct RecommendationEngine {
    catalog: Catalog,
    filter_pipeline: FilterPipeline,
}

impl RecommendationEngine {
    /// Create an engine over a catalog.
    ///
    /// The catalog is used as given; ids are not checked for uniqueness.
    pub fn new(catalog: Catalog) -> Self {
        let filter_pipeline = FilterPipeline::new().add_filter(ExcludeFavoritesFilter);
        Self {
            catalog,
            filter_pipeline,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Top `limit` books for the preferences, best first.
    ///
    /// Favorites are never included. Returns fewer than `limit` books when
    /// the catalog runs out.
    pub fn recommend(&self, preferences: &Preferences, limit: usize) -> Vec<&Book> {
        self.recommend_scored(preferences, limit)
            .into_iter()
            .map(|scored| scored.book)
            .collect()
    }

    /// [`recommend`](Self::recommend) with [`DEFAULT_LIMIT`]
    pub fn recommend_default(&self, preferences: &Preferences) -> Vec<&Book> {
        self.recommend(preferences, DEFAULT_LIMIT)
    }

    /// Like [`recommend`](Self::recommend), keeping each book's score breakdown.
    #[instrument(skip(self, preferences), fields(catalog_size = self.catalog.len()))]
    pub fn recommend_scored(&self, preferences: &Preferences, limit: usize) -> Vec<ScoredBook<'_>> {
        let start_time = Instant::now();

        let scored = self.score_catalog(preferences);
        let filtered = self.filter_pipeline.apply(scored, preferences);
        let recommendations = rank_and_select(filtered, limit);

        debug!(
            "Selected {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        recommendations
    }

    /// Books matching `query`, in catalog order. A blank query returns
    /// the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        search_books(self.catalog.books(), query)
    }

    /// The catalog books marked as favorites, in catalog order.
    ///
    /// Favorite ids that are not in the catalog are skipped.
    pub fn favorites(&self, preferences: &Preferences) -> Vec<&Book> {
        self.catalog
            .iter()
            .filter(|book| preferences.is_favorite_book(&book.id))
            .collect()
    }

    fn score_catalog(&self, preferences: &Preferences) -> Vec<ScoredBook<'_>> {
        self.catalog
            .iter()
            .map(|book| ScoredBook::new(book, score_breakdown(book, preferences)))
            .collect()
    }
}

impl Default for RecommendationEngine {
    /// Engine over the built-in sample catalog
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

/// Sort by score descending and keep the first `limit`.
///
/// `sort_by` is stable, so equal scores keep their incoming order.
fn rank_and_select(mut scored: Vec<ScoredBook<'_>>, limit: usize) -> Vec<ScoredBook<'_>> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}
