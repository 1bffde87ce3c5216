//! pageflow - full-screen paginated deck navigation for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use pageflow_app::load_settings;
use pageflow_core::{logging, Deck};

/// pageflow - full-screen paginated deck navigation for the terminal
#[derive(Parser, Debug)]
#[command(name = "pageflow")]
#[command(about = "Present a section deck full-screen in the terminal", long_about = None)]
struct Args {
    /// Path to the deck file (TOML)
    #[arg(value_name = "DECK")]
    deck: PathBuf,

    /// Start at the section with this id instead of the first one
    #[arg(long, value_name = "ID")]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install error reporting: {e}");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let deck = match Deck::load(&args.deck) {
        Ok(deck) => deck,
        Err(e) => {
            error!("failed to load deck {}: {}", args.deck.display(), e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Project-local settings live next to the deck file
    let deck_dir = args
        .deck
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = load_settings(&deck_dir);

    // Resolve the starting section from the requested id, like opening a
    // link with a fragment; an unknown id falls back to the first section
    let initial = match args.section.as_deref() {
        Some(id) => match deck.index_of(id) {
            Some(index) => index,
            None => {
                warn!("unknown section id '{}', starting at the first section", id);
                0
            }
        },
        None => 0,
    };

    match pageflow_tui::run(deck, settings, initial).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
