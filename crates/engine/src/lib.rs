//! Recommendation engine for the book catalog.
//!
//! This crate provides:
//! - `Preferences`, the value that recommendations are scored against
//! - Weighted scoring of a book against preferences
//! - The Filter trait and FilterPipeline used before ranking
//! - Case-insensitive substring search
//! - `RecommendationEngine`, which ties them together over a catalog
//!
//! ## Architecture
//! A recommendation request runs in stages:
//! 1. Every catalog book is scored (genre 40, rating 25, length 15, tags 20)
//! 2. Filters remove books that must not be recommended (favorites)
//! 3. The remainder is stably sorted by score and truncated
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Preferences, RecommendationEngine};
//!
//! let engine = RecommendationEngine::default();
//! let preferences = Preferences::default().toggle_genre("Science Fiction");
//!
//! for book in engine.recommend(&preferences, 5) {
//!     println!("{}", book.title);
//! }
//! let thrillers = engine.search("thriller");
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod preferences;
pub mod recommender;
pub mod scoring;
pub mod search;
pub mod traits;
pub mod types;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use preferences::{LengthPreference, Preferences};
pub use recommender::{DEFAULT_LIMIT, RecommendationEngine};
pub use scoring::{ScoreBreakdown, score, score_breakdown};
pub use search::search_books;
pub use traits::Filter;
pub use types::ScoredBook;
