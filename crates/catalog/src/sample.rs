//! Built-in sample catalog and genre vocabulary.

use crate::types::{Book, Catalog};

/// Genres offered when editing preferences
pub const GENRES: [&str; 10] = [
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Biography",
    "History",
    "Self-Help",
    "Thriller",
];

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    genres: &[&str],
    rating: f32,
    description: &str,
    pages: u32,
    publish_year: i32,
    cover: &str,
    tags: &[&str],
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        rating,
        description: description.to_string(),
        pages,
        publish_year,
        cover: cover.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The five sample books, in catalog order
pub fn sample_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Midnight Library",
            "Matt Haig",
            &["Fiction", "Fantasy"],
            4.2,
            "A magical library where every book represents a different life you could have lived.",
            288,
            2020,
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=400&fit=crop",
            &["philosophical", "uplifting", "thought-provoking"],
        ),
        book(
            "2",
            "Dune",
            "Frank Herbert",
            &["Science Fiction"],
            4.6,
            "Epic space opera set in a distant future amidst a feudal interstellar society.",
            688,
            1965,
            "https://images.unsplash.com/photo-1633477189729-9290b3261d0a?w=300&h=400&fit=crop",
            &["epic", "complex", "worldbuilding"],
        ),
        book(
            "3",
            "The Seven Husbands of Evelyn Hugo",
            "Taylor Jenkins Reid",
            &["Fiction", "Romance"],
            4.5,
            "A reclusive Hollywood icon finally decides to give her first interview to an unknown journalist.",
            400,
            2017,
            "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop",
            &["glamorous", "emotional", "lgbtq"],
        ),
        book(
            "4",
            "Educated",
            "Tara Westover",
            &["Biography", "Non-Fiction"],
            4.4,
            "A memoir about a woman who grows up in a survivalist family and eventually earns a PhD.",
            334,
            2018,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=400&fit=crop",
            &["inspiring", "educational", "powerful"],
        ),
        book(
            "5",
            "Gone Girl",
            "Gillian Flynn",
            &["Mystery", "Thriller"],
            4.1,
            "A psychological thriller about a marriage gone terribly wrong.",
            432,
            2012,
            "https://images.unsplash.com/photo-1495640388908-05fa85288e61?w=300&h=400&fit=crop",
            &["dark", "psychological", "twisty"],
        ),
    ]
}

impl Catalog {
    /// Catalog holding [`sample_books`]
    pub fn sample() -> Self {
        Self::new(sample_books())
    }
}
