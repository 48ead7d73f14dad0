//! Error types for the catalog crate.
//!
//! Only loading and validating a catalog can fail. Building a catalog
//! from in-memory books and querying it never returns an error.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a JSON array of books
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A book field had a value outside its documented domain
    #[error("Invalid value for {field} on book {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two books share the same identifier
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
