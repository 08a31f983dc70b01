use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use libseek_core::config::Config;
use libseek_core::{library_search, InstanceRegistry, SearchEngine, SearchRequest, SearchResponse};
use libseek_index::IndexLoader;

#[derive(Parser)]
#[command(name = "libseek", about = "libseek — fuzzy search over a library index")]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/libseek/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search libraries by name, sentence and paragraph.
    Search {
        /// Words to search for. Omit to list every library.
        query: Vec<String>,

        /// Path to the library index JSON file.
        #[arg(long, short)]
        index: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default config");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Search {
            query,
            index,
            format,
        } => run_search(&config, &query.join(" "), &index, format),
    }
}

fn run_search(config: &Config, query: &str, index: &Path, format: Format) -> anyhow::Result<()> {
    let catalog = IndexLoader::new(config.index.cache_path.as_str())
        .load(index)
        .context("failed to load library index")?;

    let mut registry = InstanceRegistry::new();
    let instance = registry.insert(catalog);

    let engine = SearchEngine::new(config.thresholds());
    let response = library_search(&registry, &engine, &SearchRequest::new(instance, query))?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        Format::Text => print_text(&response),
    }
    Ok(())
}

fn print_text(response: &SearchResponse) {
    if response.libraries.is_empty() {
        println!("No libraries matching your search.");
        return;
    }
    for lib in &response.libraries {
        println!(
            "{:<32} {:<12} {}",
            lib.name, lib.latest.version, lib.latest.sentence
        );
    }
}
