//! # Catalog Crate
//!
//! This crate holds the book catalog that recommendations and searches
//! run over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Book, BookId, Catalog)
//! - **sample**: The built-in five-book catalog and the genre vocabulary
//! - **parser**: Parse JSON catalog files into books
//! - **index**: Load a catalog from disk and validate it
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/books.json"))?;
//! let dune = catalog.get_book("2").unwrap();
//!
//! println!("{} has {} pages", dune.title, dune.pages);
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{MAX_BOOK_RATING, MIN_BOOK_RATING};
pub use sample::{GENRES, sample_books};
pub use types::{Book, BookId, Catalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get_book("1").is_none());
        assert!(catalog.genres().is_empty());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_get_book() {
        let catalog = Catalog::sample();

        let dune = catalog.get_book("2").unwrap();
        assert_eq!(dune.title, "Dune");
        assert_eq!(dune.pages, 688);
        assert!(catalog.contains("5"));
        assert!(!catalog.contains("42"));
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut books = sample_books();
        let mut copy = books[0].clone();
        copy.title = "Second Copy".to_string();
        books.push(copy);

        let catalog = Catalog::new(books);
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get_book("1").unwrap().title, "The Midnight Library");
    }

    #[test]
    fn test_catalog_genres_first_seen_order() {
        let catalog = Catalog::sample();

        assert_eq!(
            catalog.genres(),
            vec![
                "Fiction",
                "Fantasy",
                "Science Fiction",
                "Romance",
                "Biography",
                "Non-Fiction",
                "Mystery",
                "Thriller",
            ]
        );
        for genre in catalog.genres() {
            assert!(GENRES.contains(&genre));
        }
    }

    #[test]
    fn test_catalog_genres_are_distinct() {
        let mut books = sample_books();
        books[0].genres = vec!["Fiction".to_string(), "Fiction".to_string(), "Fantasy".to_string()];
        let repeated = books.clone();
        books.extend(repeated);

        let catalog = Catalog::new(books);
        assert_eq!(catalog.genres(), Catalog::sample().genres());
    }
}
