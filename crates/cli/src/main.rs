use anyhow::{Context, Result};
use catalog::ModelBundle;
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{RecommendError, Recommender, RecommendationSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// How much of an overview to show before truncating.
const OVERVIEW_EXCERPT_CHARS: usize = 150;

/// CineMatch - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(about = "Movie recommendations from a precomputed similarity matrix", long_about = None)]
struct Cli {
    /// Path to the directory holding movies.csv and similarity.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a free-text title
    Recommend {
        /// Movie name to match (fuzzy; the closest catalog title wins)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show genres and overview excerpts for each recommendation
        #[arg(long)]
        details: bool,

        /// Hide match percentages
        #[arg(long)]
        no_scores: bool,

        /// Emit the result set as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List catalog titles (optionally filtered by substring)
    Titles {
        /// Case-insensitive substring filter
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show catalog size and similarity matrix dimensions
    Info,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the model bundle (catalog + similarity matrix, cross-validated)
    let start = Instant::now();
    let bundle = ModelBundle::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load model bundle from {}", cli.data_dir.display()))?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        bundle.catalog.len(),
        start.elapsed()
    );

    let catalog = Arc::new(bundle.catalog);
    let similarity = Arc::new(bundle.similarity);

    match cli.command {
        Commands::Recommend {
            title,
            limit,
            details,
            no_scores,
            json,
        } => {
            let engine = Recommender::new(catalog, similarity)
                .context("Failed to construct recommendation engine")?;
            handle_recommend(&engine, &title, limit, details, !no_scores, json)?
        }
        Commands::Titles { filter } => handle_titles(&catalog, filter.as_deref()),
        Commands::Info => handle_info(&catalog, similarity.cardinality()),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &Recommender,
    title: &str,
    limit: usize,
    details: bool,
    show_scores: bool,
    json: bool,
) -> Result<()> {
    match engine.recommend(title, limit) {
        Ok(set) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&set)?);
            } else {
                print_recommendations(&set, details, show_scores);
            }
            Ok(())
        }
        Err(RecommendError::NoMatch { query }) => {
            println!(
                "{} No close match found for '{}'. Try a different spelling.",
                "✗".red(),
                query
            );
            Ok(())
        }
        Err(err) => Err(err).context("Recommendation failed"),
    }
}

/// Handle the 'titles' command
fn handle_titles(catalog: &catalog::CatalogStore, filter: Option<&str>) {
    let filter_lower = filter.map(|f| f.to_lowercase());
    let mut shown = 0usize;
    for title in catalog.titles() {
        if let Some(f) = &filter_lower {
            if !title.to_lowercase().contains(f.as_str()) {
                continue;
            }
        }
        println!("{title}");
        shown += 1;
    }
    println!(
        "{}",
        format!("{} of {} titles", shown, catalog.len()).dimmed()
    );
}

/// Handle the 'info' command
fn handle_info(catalog: &catalog::CatalogStore, cardinality: usize) {
    println!("{}", "Catalog".bold().blue());
    println!("  Movies: {}", catalog.len());
    println!("  Similarity matrix: {0}x{0}", cardinality);
}

/// Format and print a recommendation set with summary metrics.
fn print_recommendations(set: &RecommendationSet, details: bool, show_scores: bool) {
    println!(
        "\n{} {}",
        "Recommended movies similar to".bold(),
        set.matched_title.bold().blue()
    );

    // Aggregate metrics over the returned set (presentation concern)
    print!("  {} recommendations", set.items.len());
    if let Some(avg) = mean(set.items.iter().map(|r| r.similarity_score)) {
        print!(", {:.1}% avg match", avg * 100.0);
    }
    if let Some(avg) = mean(set.items.iter().filter_map(|r| r.vote_average)) {
        print!(", {:.1}/10 avg rating", avg);
    }
    println!("\n");

    for (rank, rec) in set.items.iter().enumerate() {
        let mut line = format!("{}. {}", (rank + 1).to_string().green(), rec.title.bold());
        if let Some(rating) = rec.vote_average {
            line.push_str(&format!(" - {rating}/10"));
        }
        if show_scores {
            line.push_str(&format!(
                " {}",
                format!("[{:.1}% match]", rec.similarity_score * 100.0).cyan()
            ));
        }
        println!("{line}");

        if details {
            if let Some(genres) = &rec.genres {
                println!("   Genres: {genres}");
            }
            if let Some(overview) = &rec.overview {
                println!("   {}", excerpt(overview, OVERVIEW_EXCERPT_CHARS));
            }
        }
    }
}

fn mean(values: impl Iterator<Item = f32>) -> Option<f32> {
    let (sum, count) = values.fold((0.0f32, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}

/// Char-safe truncation for long overview text.
fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let cut: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{cut}...")
    } else {
        cut
    }
}
