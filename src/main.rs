use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use imdb_scraper::{HttpFetcher, Movie, Person, Settings};

#[derive(Parser)]
#[command(name = "imdb_scraper", about = "Scrape movies and people from IMDb pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a movie by title id (tt...)
    Movie {
        id: String,
        /// Max cast members to keep (default: IMDB_CAST_LIMIT or 5)
        #[arg(short = 'n', long)]
        cast_limit: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search movies by name and fetch the first result
    FindMovie {
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(short = 'n', long)]
        cast_limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Fetch a person by name id (nm...)
    Person {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Search people by name and fetch the first result
    FindPerson {
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load().context("Failed to load settings")?;
    let fetcher = HttpFetcher::new(&settings).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Movie { id, cast_limit, json } => {
            if let Some(n) = cast_limit {
                settings.cast_limit = n;
            }
            let mut movie = Movie::with_id(id.as_str());
            let result = with_spinner(format!("Fetching {}", id), || {
                movie.fetch_by_id(&fetcher, &settings, &id)
            });
            finish_movie(&movie, result, json)
        }
        Commands::FindMovie { name, cast_limit, json } => {
            if let Some(n) = cast_limit {
                settings.cast_limit = n;
            }
            let query = name.join(" ");
            let mut movie = Movie::new();
            let id = with_spinner(format!("Searching {:?}", query), || {
                movie.find_id_by_name(&fetcher, &settings, &query)
            })
            .with_context(|| format!("No movie found for {:?}", query))?;
            let result = with_spinner(format!("Fetching {}", id), || {
                movie.fetch_by_id(&fetcher, &settings, &id)
            });
            finish_movie(&movie, result, json)
        }
        Commands::Person { id, json } => {
            let mut person = Person::with_id(id.as_str());
            let result = with_spinner(format!("Fetching {}", id), || {
                person.fetch_by_id(&fetcher, &settings, &id)
            });
            finish_person(&person, result, json)
        }
        Commands::FindPerson { name, json } => {
            let query = name.join(" ");
            let mut person = Person::new();
            let id = with_spinner(format!("Searching {:?}", query), || {
                person.find_id_by_name(&fetcher, &settings, &query)
            })
            .with_context(|| format!("No person found for {:?}", query))?;
            let result = with_spinner(format!("Fetching {}", id), || {
                person.fetch_by_id(&fetcher, &settings, &id)
            });
            finish_person(&person, result, json)
        }
    }
}

fn with_spinner<T>(msg: String, f: impl FnOnce() -> T) -> T {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    pb.finish_and_clear();
    out
}

/// Whatever was scanned before a failure is still printed.
fn finish_movie(movie: &Movie, result: imdb_scraper::Result<()>, json: bool) -> Result<()> {
    if let Err(e) = &result {
        if movie.is_fetched() {
            warn!("Movie {} only partially scanned: {}", movie.id(), e);
        }
    }
    if movie.is_fetched() {
        if json {
            println!("{}", serde_json::to_string_pretty(movie)?);
        } else {
            print_movie(movie);
        }
    }
    result.with_context(|| format!("Failed to scrape movie {}", movie.id()))
}

fn finish_person(person: &Person, result: imdb_scraper::Result<()>, json: bool) -> Result<()> {
    if let Err(e) = &result {
        if person.is_fetched() {
            warn!("Person {} only partially scanned: {}", person.id(), e);
        }
    }
    if person.is_fetched() {
        if json {
            println!("{}", serde_json::to_string_pretty(person)?);
        } else {
            print_person(person);
        }
    }
    result.with_context(|| format!("Failed to scrape person {}", person.id()))
}

fn print_movie(movie: &Movie) {
    println!("{} ({})", or_dash(movie.title()), movie.id());
    if movie.rating() > 0.0 {
        println!("Rating:    {:.1}", movie.rating());
    } else {
        println!("Rating:    -");
    }
    println!("Genres:    {}", or_dash(&movie.genre().join(", ")));
    println!("Directors: {}", or_dash(&people(movie.directors())));
    println!("Cast:");
    for (i, p) in movie.cast().iter().enumerate() {
        println!("  {:>2}. {:<28} {}", i + 1, p.name(), p.id());
    }
    println!("Recommendations: {}", or_dash(&movie.recommendations().join(" ")));
}

fn print_person(person: &Person) {
    println!("{} ({})", or_dash(person.name()), person.id());
    println!("Known for: {}", or_dash(&person.known_for().join(" ")));
}

fn people(list: &[Person]) -> String {
    list.iter()
        .map(|p| format!("{} ({})", p.name(), p.id()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
