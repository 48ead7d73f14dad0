//! Catalog loading and validation.
//!
//! Validation is only applied to catalogs read from disk. Catalogs built
//! in memory go straight to the engine, which tolerates any input.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Documented rating domain for books
pub const MIN_BOOK_RATING: f32 = 1.0;
pub const MAX_BOOK_RATING: f32 = 5.0;

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// Steps:
    /// 1. Parse the file into books (file order is kept)
    /// 2. Build the id index
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());

        let books = parser::parse_books(path)?;
        let catalog = Catalog::new(books);
        catalog.validate()?;

        info!(
            "Loaded {} books across {} genres",
            catalog.len(),
            catalog.genres().len()
        );
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every id is non-empty and unique
    /// - Ratings are in the documented range (1.0 - 5.0)
    /// - Page counts are positive
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.books.len());

        for book in &self.books {
            if book.id.trim().is_empty() {
                return Err(CatalogError::InvalidValue {
                    id: book.id.clone(),
                    field: "id".to_string(),
                    value: format!("{:?}", book.id),
                });
            }
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
            if !(MIN_BOOK_RATING..=MAX_BOOK_RATING).contains(&book.rating) {
                return Err(CatalogError::InvalidValue {
                    id: book.id.clone(),
                    field: "rating".to_string(),
                    value: book.rating.to_string(),
                });
            }
            if book.pages == 0 {
                return Err(CatalogError::InvalidValue {
                    id: book.id.clone(),
                    field: "pages".to_string(),
                    value: book.pages.to_string(),
                });
            }
        }
        Ok(())
    }
}
