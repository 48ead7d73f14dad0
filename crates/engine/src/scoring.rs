//! Weighted scoring of a book against a set of preferences.
//!
//! A score is the sum of four independent factors, each clamped to its own
//! weight, so it always lies in `[0, 100]` for books whose rating is
//! non-negative:
//!
//! | Factor | Max |
//! |--------|-----|
//! | Genre match | 40 |
//! | Rating fit  | 25 |
//! | Length fit  | 15 |
//! | Tag match   | 20 |

use crate::preferences::{LengthPreference, Preferences};
use catalog::Book;
use serde::Serialize;

pub const GENRE_WEIGHT: f32 = 40.0;
pub const RATING_WEIGHT: f32 = 25.0;
pub const LENGTH_WEIGHT: f32 = 15.0;
pub const TAG_WEIGHT: f32 = 20.0;

/// Page count at which a book stops counting as short
pub const SHORT_MAX_PAGES: u32 = 250;
/// Page count from which a book counts as long
pub const LONG_MIN_PAGES: u32 = 450;

/// Pages over the short limit before the short fit reaches zero
const SHORT_DECAY_PAGES: f32 = 250.0;
/// Pages over the medium range before the medium fit reaches zero
const MEDIUM_DECAY_PAGES: f32 = 200.0;

/// Per-factor contributions to a score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub genre: f32,
    pub rating: f32,
    pub length: f32,
    pub tags: f32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f32 {
        self.genre + self.rating + self.length + self.tags
    }
}

/// Score a book against preferences.
pub fn score(book: &Book, preferences: &Preferences) -> f32 {
    score_breakdown(book, preferences).total()
}

/// Compute every factor of the score for a book.
pub fn score_breakdown(book: &Book, preferences: &Preferences) -> ScoreBreakdown {
    ScoreBreakdown {
        genre: genre_match(book, preferences),
        rating: rating_fit(book.rating, preferences.preferred_rating),
        length: length_fit(book.pages, preferences.preferred_length),
        tags: tag_match(book, preferences),
    }
}

/// Share of the book's genres that the user likes, scaled to 40.
///
/// A book without genres scores 0.
pub fn genre_match(book: &Book, preferences: &Preferences) -> f32 {
    let matches = book
        .genres
        .iter()
        .filter(|genre| preferences.is_favorite_genre(genre))
        .count();

    matches as f32 / book.genres.len().max(1) as f32 * GENRE_WEIGHT
}

/// Full 25 at or above the minimum, proportional below it.
///
/// A minimum of zero or less (or NaN) means no minimum.
pub fn rating_fit(rating: f32, preferred_rating: f32) -> f32 {
    if preferred_rating.is_nan() || preferred_rating <= 0.0 || rating >= preferred_rating {
        RATING_WEIGHT
    } else {
        rating / preferred_rating * RATING_WEIGHT
    }
}

/// `length_score` scaled to 15; `Any` is a flat 15.
pub fn length_fit(pages: u32, preference: LengthPreference) -> f32 {
    length_score(pages, preference) * LENGTH_WEIGHT
}

/// How well a page count fits a length bucket, in `[0, 1]`.
///
/// - short: 1 up to 250 pages, then falls to 0 over the next 250
/// - medium: 1 from 250 to 450, ramps up from 0 below, falls to 0 over the 200 above
/// - long: 1 from 450 pages, ramps up from 0 below
/// - any: always 1
pub fn length_score(pages: u32, preference: LengthPreference) -> f32 {
    let pages_f = pages as f32;
    let short_max = SHORT_MAX_PAGES as f32;
    let long_min = LONG_MIN_PAGES as f32;

    let raw = match preference {
        LengthPreference::Short => {
            if pages <= SHORT_MAX_PAGES {
                1.0
            } else {
                1.0 - (pages_f - short_max) / SHORT_DECAY_PAGES
            }
        }
        LengthPreference::Medium => {
            if (SHORT_MAX_PAGES..=LONG_MIN_PAGES).contains(&pages) {
                1.0
            } else if pages < SHORT_MAX_PAGES {
                1.0 - (short_max - pages_f) / short_max
            } else {
                1.0 - (pages_f - long_min) / MEDIUM_DECAY_PAGES
            }
        }
        LengthPreference::Long => {
            if pages >= LONG_MIN_PAGES {
                1.0
            } else {
                pages_f / long_min
            }
        }
        LengthPreference::Any => 1.0,
    };

    raw.clamp(0.0, 1.0)
}

/// Share of the user's tags found on the book, scaled to 20.
///
/// With no tags selected every book gets the full 20. Each preference tag
/// counts once, however often the book repeats it.
pub fn tag_match(book: &Book, preferences: &Preferences) -> f32 {
    if preferences.tags.is_empty() {
        return TAG_WEIGHT;
    }

    let matches = preferences
        .tags
        .iter()
        .filter(|tag| book.tags.contains(tag))
        .count();

    matches as f32 / preferences.tags.len() as f32 * TAG_WEIGHT
}
