//! The preference model that recommendations are scored against.
//!
//! `Preferences` is a plain value. Every update action borrows the current
//! value and returns a new one, so callers can keep the previous state
//! around (undo, comparisons in tests) without aliasing concerns.

use catalog::BookId;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Length Bucket
// =============================================================================

/// Preferred book length.
///
/// Parsing is lenient: any name other than `short`, `medium` or `long`
/// becomes `Any`, which gives every book the full length score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LengthPreference {
    /// Under 250 pages
    Short,
    /// 250 to 450 pages
    Medium,
    /// 450 pages and up
    Long,
    #[default]
    Any,
}

impl LengthPreference {
    pub const ALL: [LengthPreference; 4] = [
        LengthPreference::Any,
        LengthPreference::Short,
        LengthPreference::Medium,
        LengthPreference::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthPreference::Short => "short",
            LengthPreference::Medium => "medium",
            LengthPreference::Long => "long",
            LengthPreference::Any => "any",
        }
    }

    /// Human readable label, e.g. "Medium (250-450 pages)"
    pub fn label(&self) -> &'static str {
        match self {
            LengthPreference::Short => "Short (under 250 pages)",
            LengthPreference::Medium => "Medium (250-450 pages)",
            LengthPreference::Long => "Long (450+ pages)",
            LengthPreference::Any => "Any Length",
        }
    }
}

impl From<&str> for LengthPreference {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "short" => LengthPreference::Short,
            "medium" => LengthPreference::Medium,
            "long" => LengthPreference::Long,
            _ => LengthPreference::Any,
        }
    }
}

impl From<String> for LengthPreference {
    fn from(s: String) -> Self {
        LengthPreference::from(s.as_str())
    }
}

impl fmt::Display for LengthPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Genres selected at the start of a session
pub const DEFAULT_GENRES: [&str; 1] = ["Fiction"];

/// Minimum rating selected at the start of a session
pub const DEFAULT_MIN_RATING: f32 = 3.5;

/// A user's reading preferences.
///
/// The `Vec` fields have set semantics: the update actions never insert
/// duplicates, and order does not affect scoring.
///
/// `preferred_rating` is a minimum acceptable rating. A value of zero or
/// below (or NaN) means "no minimum": every book gets the full rating score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub favorite_genres: Vec<String>,
    /// Books the user already loves; never recommended
    pub favorite_books: Vec<BookId>,
    pub preferred_length: LengthPreference,
    pub preferred_rating: f32,
    pub tags: Vec<String>,
}

impl Default for Preferences {
    /// Session-start preferences: Fiction, any length, rating 3.5 or better
    fn default() -> Self {
        Self {
            favorite_genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            favorite_books: Vec::new(),
            preferred_length: LengthPreference::Any,
            preferred_rating: DEFAULT_MIN_RATING,
            tags: Vec::new(),
        }
    }
}

impl Preferences {
    /// Preferences with nothing selected and no rating minimum
    pub fn empty() -> Self {
        Self {
            favorite_genres: Vec::new(),
            favorite_books: Vec::new(),
            preferred_length: LengthPreference::Any,
            preferred_rating: 0.0,
            tags: Vec::new(),
        }
    }

    pub fn is_favorite_genre(&self, genre: &str) -> bool {
        self.favorite_genres.iter().any(|g| g == genre)
    }

    pub fn is_favorite_book(&self, id: &str) -> bool {
        self.favorite_books.iter().any(|b| b == id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // Update actions. Each returns a new value and leaves `self` untouched.

    /// Select the genre if it is not selected, otherwise deselect it
    pub fn toggle_genre(&self, genre: &str) -> Self {
        let mut next = self.clone();
        next.favorite_genres = toggled(&self.favorite_genres, genre);
        next
    }

    /// Mark the book as a favorite, or unmark it if it already is one
    pub fn toggle_favorite(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.favorite_books = toggled(&self.favorite_books, id);
        next
    }

    /// Add a tag, trimmed and lowercased. Blank and repeated tags are ignored.
    pub fn add_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !self.has_tag(&tag) {
            next.tags.push(tag);
        }
        next
    }

    pub fn remove_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.tags.retain(|t| t != tag);
        next
    }

    pub fn with_length(&self, length: LengthPreference) -> Self {
        Self {
            preferred_length: length,
            ..self.clone()
        }
    }

    pub fn with_min_rating(&self, rating: f32) -> Self {
        Self {
            preferred_rating: rating,
            ..self.clone()
        }
    }
}

/// Copy of `items` with `value` removed if present, appended otherwise
fn toggled(items: &[String], value: &str) -> Vec<String> {
    if items.iter().any(|item| item == value) {
        items.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = items.to_vec();
        next.push(value.to_string());
        next
    }
}
