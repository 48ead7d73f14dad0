//! Parser for JSON catalog files.
//!
//! A catalog file is a JSON array of books:
//!
//! ```json
//! [{ "id": "2", "title": "Dune", "author": "Frank Herbert",
//!    "genre": ["Science Fiction"], "rating": 4.6, "description": "...",
//!    "pages": 688, "publishYear": 1965, "cover": "...", "tags": ["epic"] }]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog file into books, preserving file order
pub fn parse_books(path: &Path) -> Result<Vec<Book>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    parse_books_str(&content, &path.display().to_string())
}

/// Parse catalog JSON held in memory.
///
/// `source` names the origin of the text in error messages.
pub fn parse_books_str(content: &str, source: &str) -> Result<Vec<Book>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: source.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"[{
            "id": "7",
            "title": "Piranesi",
            "author": "Susanna Clarke",
            "genre": ["Fantasy"],
            "rating": 4.3,
            "description": "A house of endless halls.",
            "pages": 272,
            "publishYear": 2020,
            "cover": "",
            "tags": ["mysterious"]
        }]"#;

        let books = parse_books_str(json, "inline").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "7");
        assert_eq!(books[0].genres, vec!["Fantasy".to_string()]);
        assert_eq!(books[0].publish_year, 2020);
        assert_eq!(books[0].pages, 272);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_books_str("{ not a list", "broken.json").unwrap_err();
        match err {
            CatalogError::ParseError { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"[{ "id": "1", "title": "No Author" }]"#;
        assert!(matches!(
            parse_books_str(json, "inline"),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_books(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
