//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_game::{
    commands::{load_words, run_fetch, run_simple, show_stats},
    config::{Config, parse_timeout},
    interactive::{App, run_tui},
    logging,
    player::PlayerStore,
    session::Session,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the word cache, player stats and log file
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// URL of a newline-delimited word list ('' disables downloading)
    #[arg(short = 'u', long, global = true)]
    word_url: Option<String>,

    /// Word list download timeout in seconds
    #[arg(short, long, global = true, value_parser = parse_timeout)]
    timeout_secs: Option<u64>,

    /// Never fall back to the built-in word list
    #[arg(long, global = true)]
    no_bundled: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Re-download the word list and refresh the cache
    Fetch,

    /// Show a player's saved statistics
    Stats {
        /// Player name
        name: String,
    },
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env(cli.data_dir.clone())?;

    if let Some(url) = &cli.word_url {
        config.word_url = (!url.trim().is_empty()).then(|| url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if cli.no_bundled {
        config.bundled = false;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    logging::init(&config.log_path(), cli.verbose)?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting");

    let source = WordSource::from_config(&config);
    let store = PlayerStore::new(config.players_dir());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let words = load_words(&source).await?;
            run_tui(App::new(Session::new(words, store)))
        }
        Commands::Simple => {
            let words = load_words(&source).await?;
            run_simple(&mut Session::new(words, store))
        }
        Commands::Fetch => run_fetch(&source).await.map(|_| ()),
        Commands::Stats { name } => show_stats(&store, &name).map(|_| ()),
    }
}
