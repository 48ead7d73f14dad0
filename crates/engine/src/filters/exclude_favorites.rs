//! Filter to remove books the user has marked as favorites.
//!
//! A favorite is a book the user already knows and loves, so it is never
//! recommended back to them, whatever its score.

use crate::preferences::Preferences;
use crate::traits::Filter;
use crate::types::ScoredBook;
use std::collections::HashSet;

/// Removes scored books whose id is in `Preferences::favorite_books`.
///
/// ## Algorithm
/// Builds a HashSet of favorite ids once, then does O(1) lookups per book.
pub struct ExcludeFavoritesFilter;

impl Filter for ExcludeFavoritesFilter {
    fn name(&self) -> &str {
        "ExcludeFavoritesFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<ScoredBook<'a>>,
        preferences: &Preferences,
    ) -> Vec<ScoredBook<'a>> {
        if preferences.favorite_books.is_empty() {
            return candidates;
        }

        let favorites: HashSet<&str> = preferences
            .favorite_books
            .iter()
            .map(String::as_str)
            .collect();

        candidates
            .into_iter()
            .filter(|candidate| !favorites.contains(candidate.book.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreBreakdown;
    use catalog::Catalog;

    #[test]
    fn test_exclude_favorites_filter() {
        let catalog = Catalog::sample();
        let preferences = Preferences::default()
            .toggle_favorite("2")
            .toggle_favorite("4");

        let candidates: Vec<ScoredBook> = catalog
            .iter()
            .map(|book| ScoredBook::new(book, ScoreBreakdown::default()))
            .collect();

        let filtered = ExcludeFavoritesFilter.apply(candidates, &preferences);

        let ids: Vec<&str> = filtered.iter().map(|c| c.book.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_unknown_favorite_ids_are_ignored() {
        let catalog = Catalog::sample();
        let preferences = Preferences::default().toggle_favorite("404");

        let candidates: Vec<ScoredBook> = catalog
            .iter()
            .map(|book| ScoredBook::new(book, ScoreBreakdown::default()))
            .collect();

        assert_eq!(ExcludeFavoritesFilter.apply(candidates, &preferences).len(), 5);
    }
}
