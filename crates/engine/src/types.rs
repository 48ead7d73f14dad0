//! Shared types passed between the engine stages.

use crate::scoring::ScoreBreakdown;
use catalog::Book;
use serde::Serialize;

/// A catalog book together with its score for one set of preferences.
///
/// Borrows the book from the engine's catalog, so scoring never copies
/// book data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredBook<'a> {
    pub book: &'a Book,
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ScoredBook<'a> {
    pub fn new(book: &'a Book, breakdown: ScoreBreakdown) -> Self {
        Self {
            book,
            score: breakdown.total(),
            breakdown,
        }
    }

    /// One-line explanation of where the score came from
    pub fn explanation(&self) -> String {
        format!(
            "Score: {:.1} (genre {:.1}, rating {:.1}, length {:.1}, tags {:.1})",
            self.score,
            self.breakdown.genre,
            self.breakdown.rating,
            self.breakdown.length,
            self.breakdown.tags
        )
    }
}
