//! Case-insensitive substring search over a catalog.
//!
//! Results keep catalog order; no relevance ranking is applied.

use catalog::Book;
use tracing::debug;

/// Search books by title, author, genre or tag.
///
/// A blank query (empty or whitespace only) returns every book. Otherwise
/// the lowercased query, whitespace included, must appear in one of the
/// lowercased fields.
pub fn search_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    if query.trim().is_empty() {
        return books.iter().collect();
    }

    let query_lower = query.to_lowercase();
    let results: Vec<&Book> = books
        .iter()
        .filter(|book| matches_query(book, &query_lower))
        .collect();

    debug!("Search {:?} matched {} of {} books", query, results.len(), books.len());
    results
}

/// Whether any searchable field contains `query_lower`
pub fn matches_query(book: &Book, query_lower: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query_lower);

    contains(book.title.as_str())
        || contains(book.author.as_str())
        || book.genres.iter().any(|genre| contains(genre.as_str()))
        || book.tags.iter().any(|tag| contains(tag.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample_books;

    fn titles<'a>(books: &[&'a Book]) -> Vec<&'a str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let books = sample_books();

        assert_eq!(search_books(&books, "").len(), 5);
        assert_eq!(search_books(&books, "   \t").len(), 5);
    }

    #[test]
    fn test_title_match() {
        let books = sample_books();
        assert_eq!(titles(&search_books(&books, "dune")), vec!["Dune"]);
    }

    #[test]
    fn test_author_match() {
        let books = sample_books();
        assert_eq!(titles(&search_books(&books, "westover")), vec!["Educated"]);
    }

    #[test]
    fn test_genre_match() {
        let books = sample_books();
        assert_eq!(titles(&search_books(&books, "thriller")), vec!["Gone Girl"]);
    }

    #[test]
    fn test_tag_match() {
        let books = sample_books();
        assert_eq!(titles(&search_books(&books, "worldbuild")), vec!["Dune"]);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let books = sample_books();
        // "fiction" hits genres of books 1, 2 ("Science Fiction"), 3 and 4 ("Non-Fiction")
        let ids: Vec<&str> = search_books(&books, "fiction")
            .iter()
            .map(|b| b.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let books = sample_books();
        assert!(search_books(&books, " dune").is_empty());
    }

    #[test]
    fn test_no_matches() {
        let books = sample_books();
        assert!(search_books(&books, "cookbook").is_empty());
        assert!(search_books(&[], "dune").is_empty());
    }
}
