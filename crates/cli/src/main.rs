use anyhow::{Context, Result};
use catalog::{Catalog, MovieTitle};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::{
    LeadingCharFilter, MinimumWordCountFilter, RandomSampleFilter, TitleFilter,
    filter_by_leading_char_even_length, filter_by_minimum_word_count,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// movie-filter - Filter a list of movie titles
#[derive(Parser)]
#[command(name = "movie-filter")]
#[command(about = "Sample and filter movie titles from the built-in catalog", long_about = None)]
struct Cli {
    /// Use these titles instead of the built-in catalog (repeatable)
    #[arg(long = "title", global = true)]
    titles: Vec<MovieTitle>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw random titles
    Random {
        /// Number of titles to draw
        #[arg(long, default_value_t = RandomSampleFilter::DEFAULT_COUNT, allow_negative_numbers = true)]
        count: i64,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Titles starting with a character and having an even length
    FirstChar {
        /// The leading character (case-insensitive)
        #[arg(long = "char", default_value = LeadingCharFilter::DEFAULT_CHAR, allow_hyphen_values = true)]
        needle: String,
    },

    /// Titles with at least a number of space-separated words
    MinimumWord {
        /// Minimum number of words
        #[arg(long, default_value_t = MinimumWordCountFilter::DEFAULT_MINIMUM, allow_negative_numbers = true)]
        minimum_count: i64,
    },

    /// Show the catalog, marking blank entries
    List,
}

impl Cli {
    fn catalog(&self) -> Catalog {
        if self.titles.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::from(self.titles.clone())
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = cli.catalog();
    tracing::debug!(
        "Using catalog of {} titles ({} eligible)",
        catalog.len(),
        catalog.eligible_count()
    );

    match cli.command {
        Commands::Random { count, seed } => {
            let titles = handle_random(&catalog, count, seed)?;
            print_titles("Random titles", &titles);
        }
        Commands::FirstChar { needle } => {
            let titles = handle_first_char(&catalog, &needle)?;
            print_titles(&format!("Titles starting with {needle:?} with even length"), &titles);
        }
        Commands::MinimumWord { minimum_count } => {
            let titles = handle_minimum_word(&catalog, minimum_count)?;
            print_titles(&format!("Titles with at least {minimum_count} words"), &titles);
        }
        Commands::List => print_catalog(&catalog),
    }

    Ok(())
}

/// Handle the 'random' command
fn handle_random(catalog: &Catalog, count: i64, seed: Option<u64>) -> Result<Vec<MovieTitle>> {
    let filter = RandomSampleFilter::new(count);
    let titles = match seed {
        Some(seed) => filter.apply_with_rng(catalog.to_vec(), &mut StdRng::seed_from_u64(seed)),
        None => filter.apply(catalog.to_vec()),
    };
    titles.with_context(|| format!("Failed to draw {count} random titles"))
}

/// Handle the 'first-char' command
fn handle_first_char(catalog: &Catalog, needle: &str) -> Result<Vec<MovieTitle>> {
    filter_by_leading_char_even_length(needle, catalog.to_vec())
        .with_context(|| format!("Failed to filter by leading character {needle:?}"))
}

/// Handle the 'minimum-word' command
fn handle_minimum_word(catalog: &Catalog, minimum_count: i64) -> Result<Vec<MovieTitle>> {
    filter_by_minimum_word_count(minimum_count, catalog.to_vec())
        .with_context(|| format!("Failed to filter by minimum word count {minimum_count}"))
}

fn print_titles(header: &str, titles: &[MovieTitle]) {
    println!("{}", header.bold().blue());
    if titles.is_empty() {
        println!("  {}", "(no titles)".dimmed());
        return;
    }
    for (i, title) in titles.iter().enumerate() {
        // quoted so surrounding spaces stay visible
        println!("{:>3}. {:?}", (i + 1).to_string().green(), title);
    }
}

fn print_catalog(catalog: &Catalog) {
    println!(
        "{}",
        format!(
            "Catalog: {} titles, {} eligible",
            catalog.len(),
            catalog.eligible_count()
        )
        .bold()
        .blue()
    );
    for (i, title) in catalog.titles().iter().enumerate() {
        let marker = if catalog::normalize::is_eligible(title) {
            "•".green()
        } else {
            "∅".red()
        };
        println!("{:>3}. {} {:?}", i + 1, marker, title);
    }
}
