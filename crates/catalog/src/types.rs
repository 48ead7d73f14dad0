//! Core domain types for the book catalog.
//!
//! `Book` mirrors the JSON shape used by catalog files (camelCase keys,
//! `genre` for the genre list). `Catalog` keeps books in their original
//! order and adds an id index for lookups.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a book within a catalog
pub type BookId = String;

// =============================================================================
// Book
// =============================================================================

/// A single catalog entry.
///
/// Books are immutable once they are in a catalog. Ratings are documented
/// as 1.0 to 5.0 but nothing here enforces it; see [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Ordered genre tags, e.g. `["Fiction", "Fantasy"]`
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
    pub rating: f32,
    pub description: String,
    pub pages: u32,
    pub publish_year: i32,
    /// Cover image reference (usually a URL)
    pub cover: String,
    /// Free-text labels such as "uplifting" or "worldbuilding"
    pub tags: Vec<String>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, in-memory collection of books.
///
/// Order is significant: search results and ranking ties follow it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) books: Vec<Book>,
    /// Position of each id in `books`; the first occurrence wins
    pub(crate) id_index: HashMap<BookId, usize>,
}

impl Catalog {
    /// Creates a catalog from books in the given order.
    ///
    /// Duplicate ids are accepted; lookups resolve to the first one.
    pub fn new(books: Vec<Book>) -> Self {
        let mut id_index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            id_index.entry(book.id.clone()).or_insert(position);
        }
        Self { books, id_index }
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Get a book by id
    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.id_index.get(id).map(|&position| &self.books[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Distinct genres used by the catalog, in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.books
            .iter()
            .flat_map(|book| book.genres.iter())
            .map(String::as_str)
            .filter(|genre| seen.insert(genre))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
