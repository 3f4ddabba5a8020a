mod config;
mod corpus;
mod engine;
mod normalizer;
mod ranker;
mod resolver;
mod search;
mod shell;
mod ui;
mod vectorizer;

use crate::config::ConfigManager;
use crate::corpus::CorpusStore;
use crate::engine::Recommender;
use crate::normalizer::StopWords;
use crate::search::SearchEngine;
use crate::shell::Shell;
use crate::ui::{create_spinner, log_error, log_success, print_banner, print_recommendations};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(name = "pantry")]
struct Cli {
    /// Corpus file to use instead of the configured one
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive recommendation shell
    Shell,
    /// One-shot recommendation from desired ingredients
    Ingredients {
        items: Vec<String>,
    },
    /// One-shot recommendation from dishes you like
    Dishes {
        names: Vec<String>,
    },
    /// Fuzzy-search recipe titles
    Search {
        query: String,
    },
    Config {
        #[arg(long)]
        set_corpus: Option<String>,
        #[arg(long, action)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    print_banner();
    if let Err(e) = run().await {
        log_error(&e.to_string());
        exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let pantry_root = home.join(".pantry");
    if !pantry_root.exists() {
        std::fs::create_dir_all(&pantry_root)?;
    }

    let config_manager = ConfigManager::new(&pantry_root);
    let mut config = config_manager.load().await?;

    let cli = Cli::parse();

    let corpus_path = cli
        .corpus
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.corpus_path));
    let store = CorpusStore::new(corpus_path);

    let mut stop_words = StopWords::standard();
    stop_words.extend(&config.extra_stop_words);

    match cli.command {
        Commands::Shell => {
            let engine = build_engine(&store, &stop_words)?;
            Shell::new(&engine).run()?;
        }
        Commands::Ingredients { items } => {
            let engine = build_engine(&store, &stop_words)?;
            let positions = engine.by_ingredients(&items);
            let picks: Vec<_> = positions.iter().map(|&p| engine.recipe(p)).collect();
            print_recommendations(&picks);
        }
        Commands::Dishes { names } => {
            let engine = build_engine(&store, &stop_words)?;
            let positions = engine.by_dishes(&names);
            let picks: Vec<_> = positions.iter().map(|&p| engine.recipe(p)).collect();
            print_recommendations(&picks);
        }
        Commands::Search { query } => {
            let recipes = store.load()?;
            let results = SearchEngine::search(&query, &recipes);

            println!("{}", "SEARCH RESULTS".bold().underline());
            if results.is_empty() {
                println!("No recipes found matching '{}'", query);
            } else {
                for (_, position) in results {
                    let recipe = &recipes[position];
                    let title = recipe.title.as_deref().unwrap_or("No Title");
                    println!("{} - {}", title.green().bold(), recipe.categories.join(", "));
                }
            }
            println!();
        }
        Commands::Config { set_corpus, show } => {
            if let Some(path) = set_corpus {
                config.corpus_path = path.clone();
                config_manager.save(&config).await?;
                log_success(&format!("Corpus path updated to: {}", path));
            } else if show {
                println!("Current Configuration:");
                println!("   Corpus: {}", config.corpus_path);
                println!("   Extra stop words: {:?}", config.extra_stop_words);
            } else {
                println!("Use --show or --set-corpus <PATH>");
            }
        }
    }

    Ok(())
}

// The fit step runs exactly once per invocation; every query path reads the
// frozen model afterwards.
fn build_engine(store: &CorpusStore, stop_words: &StopWords) -> anyhow::Result<Recommender> {
    let recipes = store.load()?;
    let spinner = create_spinner(&format!("Indexing {} recipes...", recipes.len()));
    let engine = Recommender::new(recipes, stop_words)?;
    spinner.finish_and_clear();
    log_success(&format!(
        "Indexed {} recipes across {} terms",
        engine.len(),
        engine.vocabulary_size()
    ));
    Ok(engine)
}
