use anyhow::{Context, Result, bail};
use catalog::{Book, Catalog, GENRES};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{DEFAULT_LIMIT, LengthPreference, Preferences, RecommendationEngine, ScoredBook};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

const EMPTY_RECOMMENDATIONS: &str = "Adjust your preferences to get personalized recommendations.";
const EMPTY_SEARCH: &str = "No books found for your search.";
const EMPTY_FAVORITES: &str =
    "You haven't added any favorite books yet. Heart some books to see them here!";

/// Shelfwise - Book Recommendation Engine
#[derive(Parser)]
#[command(name = "shelfwise")]
#[command(about = "Book recommendations from your reading preferences", long_about = None)]
struct Cli {
    /// JSON catalog file; the built-in sample catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get book recommendations for a set of preferences
    Recommend {
        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Search books by title, author, genre or tag
    Search {
        /// Case-insensitive substring; omit to list the whole catalog
        query: Option<String>,

        /// Only show title, author and the first two genres
        #[arg(long)]
        compact: bool,
    },

    /// Show the books marked as favorites
    Favorites {
        /// Favorite book id (repeatable)
        #[arg(long = "favorite", value_name = "ID")]
        favorites: Vec<String>,
    },

    /// List the whole catalog in order
    List {
        #[arg(long)]
        compact: bool,
    },

    /// List the genres that can be selected as favorites
    Genres,

    /// Score random preference sets to measure ranking latency
    Benchmark {
        /// Number of recommendation requests to run
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

/// Preference flags; defaults match a fresh session
#[derive(Args)]
struct PreferenceArgs {
    /// Favorite genre (repeatable)
    #[arg(long = "genre", value_name = "GENRE", default_values_t = ["Fiction".to_string()])]
    genres: Vec<String>,

    /// Start with no favorite genres instead of the session default
    #[arg(long, conflicts_with = "genres")]
    no_genres: bool,

    /// Favorite tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Favorite book id to exclude from recommendations (repeatable)
    #[arg(long = "favorite", value_name = "ID")]
    favorites: Vec<String>,

    /// Preferred length: short, medium, long or any
    #[arg(long, default_value = "any")]
    length: String,

    /// Minimum acceptable rating (1.0 - 5.0)
    #[arg(long, default_value_t = 3.5, value_parser = parse_rating)]
    min_rating: f32,
}

impl PreferenceArgs {
    /// Apply the flags to a fresh preference value, one action at a time
    fn to_preferences(&self) -> Preferences {
        let mut preferences = Preferences::empty()
            .with_length(LengthPreference::from(self.length.as_str()))
            .with_min_rating(self.min_rating);

        let genres: &[String] = if self.no_genres { &[] } else { &self.genres };
        for genre in genres {
            if !preferences.is_favorite_genre(genre) {
                preferences = preferences.toggle_genre(genre);
            }
        }
        for tag in &self.tags {
            preferences = preferences.add_tag(tag);
        }
        for id in &self.favorites {
            if !preferences.is_favorite_book(id) {
                preferences = preferences.toggle_favorite(id);
            }
        }
        preferences
    }
}

fn parse_rating(s: &str) -> std::result::Result<f32, String> {
    let rating: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (1.0..=5.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(format!("rating must be between 1.0 and 5.0, got {rating}"))
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };
    info!("Catalog ready with {} books", catalog.len());
    let engine = RecommendationEngine::new(catalog);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            preferences,
            limit,
            explain,
        } => handle_recommend(&engine, &preferences.to_preferences(), limit, explain),
        Commands::Search { query, compact } => {
            handle_search(&engine, query.as_deref().unwrap_or_default(), compact)
        }
        Commands::Favorites { favorites } => handle_favorites(&engine, &favorites),
        Commands::List { compact } => {
            print_books("Catalog", engine.catalog().books().iter(), compact);
            Ok(())
        }
        Commands::Genres => {
            handle_genres(&engine);
            Ok(())
        }
        Commands::Benchmark { requests } => handle_benchmark(&engine, requests),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    preferences: &Preferences,
    limit: usize,
    explain: bool,
) -> Result<()> {
    for id in &preferences.favorite_books {
        if !engine.catalog().contains(id) {
            bail!("Book {} not found in catalog", id);
        }
    }

    print_preferences(preferences);
    let recommendations = engine.recommend_scored(preferences, limit);

    if recommendations.is_empty() {
        println!("{}", EMPTY_RECOMMENDATIONS.yellow());
        return Ok(());
    }
    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &RecommendationEngine, query: &str, compact: bool) -> Result<()> {
    let results = engine.search(query);
    let header = if query.trim().is_empty() {
        "Search Books".to_string()
    } else {
        format!("Search Results for \"{}\"", query)
    };

    if results.is_empty() {
        println!("{}", header.bold().blue());
        println!("{}", EMPTY_SEARCH.yellow());
        return Ok(());
    }
    print_books(&header, results.into_iter(), compact);
    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(engine: &RecommendationEngine, ids: &[String]) -> Result<()> {
    let mut preferences = Preferences::default();
    for id in ids {
        if !engine.catalog().contains(id) {
            bail!("Book {} not found in catalog", id);
        }
        if !preferences.is_favorite_book(id) {
            preferences = preferences.toggle_favorite(id);
        }
    }

    let favorites = engine.favorites(&preferences);
    if favorites.is_empty() {
        println!("{}", "Your Favorite Books".bold().blue());
        println!("{}", EMPTY_FAVORITES.yellow());
        return Ok(());
    }
    print_books("Your Favorite Books", favorites.into_iter(), false);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(engine: &RecommendationEngine) {
    println!("{}", "Genres:".bold().blue());
    let in_catalog = engine.catalog().genres();
    for genre in GENRES {
        let count = engine
            .catalog()
            .iter()
            .filter(|book| book.genres.iter().any(|g| g == genre))
            .count();
        if in_catalog.contains(&genre) {
            println!("{}{} ({} books)", "• ".green(), genre, count);
        } else {
            println!("{}{}", "• ".dimmed(), genre.dimmed());
        }
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &RecommendationEngine, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    let mut rng = rand::rng();
    let preference_sets: Vec<Preferences> = (0..requests)
        .map(|_| random_preferences(&mut rng, engine.catalog()))
        .collect();

    let started = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for preferences in &preference_sets {
        let start = Instant::now();
        let recommendations = engine.recommend(preferences, DEFAULT_LIMIT);
        timings.push(start.elapsed());
        std::hint::black_box(recommendations);
    }
    let total_time = started.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Catalog size: {}", engine.catalog().len());
    println!("Requests: {}", requests);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Random preferences drawn from the genre vocabulary and catalog tags
fn random_preferences(rng: &mut impl Rng, catalog: &Catalog) -> Preferences {
    let mut preferences = Preferences::empty()
        .with_length(LengthPreference::ALL[rng.random_range(0..LengthPreference::ALL.len())])
        .with_min_rating(rng.random_range(1.0..=5.0));

    for _ in 0..rng.random_range(0..=3) {
        let genre = GENRES[rng.random_range(0..GENRES.len())];
        if !preferences.is_favorite_genre(genre) {
            preferences = preferences.toggle_genre(genre);
        }
    }

    if !catalog.is_empty() {
        for _ in 0..rng.random_range(0..=2) {
            let book = &catalog.books()[rng.random_range(0..catalog.len())];
            if let Some(tag) = book.tags.first() {
                preferences = preferences.add_tag(tag);
            }
        }
        if rng.random_bool(0.3) {
            let book = &catalog.books()[rng.random_range(0..catalog.len())];
            preferences = preferences.toggle_favorite(&book.id);
        }
    }
    preferences
}

fn print_preferences(preferences: &Preferences) {
    let genres = if preferences.favorite_genres.is_empty() {
        "none".to_string()
    } else {
        preferences.favorite_genres.join(", ")
    };
    println!("{}", "Reading Preferences".bold().blue());
    println!("{}Favorite genres: {}", "• ".green(), genres);
    println!("{}Length: {}", "• ".green(), preferences.preferred_length.label());
    println!("{}Minimum rating: {:.1}", "• ".green(), preferences.preferred_rating);
    if !preferences.tags.is_empty() {
        let tags: Vec<String> = preferences.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}Tags: {}", "• ".green(), tags.join(" "));
    }
    if !preferences.favorite_books.is_empty() {
        println!("{}Favorites: {}", "• ".green(), preferences.favorite_books.join(", "));
    }
    println!();
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredBook<'_>], explain: bool) {
    println!("{}", "Recommended for You:".bold().blue());
    for (i, rec) in recommendations.iter().enumerate() {
        let rank = i + 1;
        println!(
            "{}. {} by {} ({}) [{}] ★ {:.1} - Score: {:.2}",
            rank.to_string().green(),
            rec.book.title.bold(),
            rec.book.author,
            rec.book.publish_year,
            rec.book.genres.join(", "),
            rec.book.rating,
            rec.score
        );
        if explain {
            println!("   {}", rec.explanation().dimmed());
        }
    }
}

fn print_books<'a>(header: &str, books: impl Iterator<Item = &'a Book>, compact: bool) {
    println!("{}", header.bold().blue());
    let mut count = 0;
    for book in books {
        print_book(book, compact);
        count += 1;
    }
    println!("{} {} books", "✓".green(), count);
}

/// Render one book, mirroring the card layout: compact shows two genres
fn print_book(book: &Book, compact: bool) {
    let genre_count = if compact { 2 } else { 3 };
    let genres: Vec<&str> = book
        .genres
        .iter()
        .take(genre_count)
        .map(String::as_str)
        .collect();

    println!(
        "{} {} by {} ★ {:.1} [{}]",
        format!("[{}]", book.id).cyan(),
        book.title.bold(),
        book.author,
        book.rating,
        genres.join(", ")
    );
    if compact {
        return;
    }
    println!("    {} pages · {}", book.pages, book.publish_year);
    println!("    {}", book.description);
    if !book.tags.is_empty() {
        let tags: Vec<String> = book.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("    {}", tags.join(" ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_recommend_defaults_match_session_start() {
        let cli = Cli::parse_from(["shelfwise", "recommend"]);
        let Commands::Recommend { preferences, limit, explain } = cli.command else {
            panic!("expected recommend");
        };

        assert_eq!(preferences.to_preferences(), Preferences::default());
        assert_eq!(limit, DEFAULT_LIMIT);
        assert!(!explain);
    }

    #[test]
    fn test_recommend_flags_build_preferences() {
        let cli = Cli::parse_from([
            "shelfwise",
            "recommend",
            "--genre",
            "Science Fiction",
            "--genre",
            "Science Fiction",
            "--tag",
            "Epic",
            "--favorite",
            "2",
            "--length",
            "long",
            "--min-rating",
            "4.0",
        ]);
        let Commands::Recommend { preferences, .. } = cli.command else {
            panic!("expected recommend");
        };
        let preferences = preferences.to_preferences();

        assert_eq!(preferences.favorite_genres, vec!["Science Fiction"]);
        assert_eq!(preferences.tags, vec!["epic"]);
        assert_eq!(preferences.favorite_books, vec!["2"]);
        assert_eq!(preferences.preferred_length, LengthPreference::Long);
        assert_eq!(preferences.preferred_rating, 4.0);
    }

    #[test]
    fn test_no_genres_clears_default_genre() {
        let cli = Cli::parse_from(["shelfwise", "recommend", "--no-genres"]);
        let Commands::Recommend { preferences, .. } = cli.command else {
            panic!("expected recommend");
        };

        let preferences = preferences.to_preferences();
        assert!(preferences.favorite_genres.is_empty());
        assert_eq!(preferences, Preferences::default().toggle_genre("Fiction"));
    }

    #[test]
    fn test_no_genres_conflicts_with_genre() {
        let result = Cli::try_parse_from(["shelfwise", "recommend", "--no-genres", "--genre", "Fantasy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_length_falls_back_to_any() {
        let cli = Cli::parse_from(["shelfwise", "recommend", "--length", "huge"]);
        let Commands::Recommend { preferences, .. } = cli.command else {
            panic!("expected recommend");
        };

        assert_eq!(preferences.to_preferences().preferred_length, LengthPreference::Any);
    }

    #[test]
    fn test_rating_outside_slider_range_rejected() {
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("5.1").is_err());
        assert!(parse_rating("abc").is_err());
        assert_eq!(parse_rating("4.5"), Ok(4.5));
    }

    #[test]
    fn test_search_query_is_optional() {
        let cli = Cli::parse_from(["shelfwise", "search"]);
        let Commands::Search { query, .. } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(query, None);

        let cli = Cli::parse_from(["shelfwise", "search", "DUNE"]);
        let Commands::Search { query, .. } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(query.as_deref(), Some("DUNE"));
    }

    #[test]
    fn test_random_preferences_stay_in_range() {
        let catalog = Catalog::sample();
        let mut rng = rand::rng();

        for _ in 0..100 {
            let preferences = random_preferences(&mut rng, &catalog);
            assert!((1.0..=5.0).contains(&preferences.preferred_rating));
            assert!(preferences.favorite_genres.len() <= 3);
            assert!(preferences.tags.len() <= 2);
            for id in &preferences.favorite_books {
                assert!(catalog.contains(id));
            }
        }
    }
}
