//! Catswipe CLI application entry point
//!
//! # Features
//!
//! - **Play**: Swipe through a deck of random cats in the terminal
//! - **Resume**: Progress and the deck survive restarts
//! - **Summary**: Print what was liked and disliked
//!
//! # Usage
//!
//! ```bash
//! # Swipe (default command)
//! catswipe
//! catswipe play --count 20
//!
//! # Print the tally so far
//! catswipe summary
//!
//! # Throw away progress and the deck
//! catswipe new
//! ```
//!
//! # Configuration
//!
//! On first run a default configuration is written to the user's config
//! directory (`~/.config/catswipe/config.toml` on Linux).

use catswipe::{
    CatswipeError,
    cli::{Cli, Commands, ConfigCommands},
    config::SwipeConfig,
    feedback::TerminalBell,
    logging,
    media::{CataasSource, MediaSource, Prefetcher},
    session::{Item, Summary, SwipeSession},
    store::{Progress, SledStore},
    ui::SwipeApp,
};
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, CatswipeError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = SwipeConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = cli.get_command() {
        return handle_config_command(&command, &config);
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.database_path()?,
    };
    let log_dir = db_path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    logging::init(&log_dir)?;
    tracing::info!(db = %db_path.display(), "starting catswipe");

    let store = SledStore::open(&db_path)?;

    match cli.get_command() {
        Commands::Play { count } => handle_play_command(&store, &config, count, quiet),
        Commands::Summary => {
            print_summary(&stored_summary(&store)?, quiet);
            Ok(())
        }
        Commands::New => handle_new_command(&store, quiet),
        Commands::Config { .. } => Ok(()),
    }
}

/// Load the stored deck or build and store a new one
///
/// # Errors
///
/// Returns `CatswipeError` if the deck cannot be read or written.
fn load_or_build_deck(store: &SledStore, count: usize) -> Result<Vec<Item>> {
    if let Some(deck) = store.load_deck()?
        && !deck.is_empty()
    {
        return Ok(deck);
    }

    let deck = CataasSource::new(count).items();
    store.replace_deck(&deck)?;
    tracing::info!(count = deck.len(), "built new deck");
    Ok(deck)
}

/// Handle the play command - run the swipe screen
///
/// # Errors
///
/// Returns `CatswipeError` if the deck cannot be loaded or the terminal fails.
fn handle_play_command(
    store: &SledStore,
    config: &SwipeConfig,
    count: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let deck = load_or_build_deck(store, count.unwrap_or(config.deck_size))?;

    let mut app = SwipeApp::new(config.column_scale);
    if config.prefetch {
        let prefetcher = Prefetcher::new(deck.len());
        let _ = prefetcher.spawn(deck.clone());
        app = app.with_prefetcher(prefetcher);
    }

    let session = SwipeSession::new(deck, store, config.session_settings());
    let mut session = if config.haptics {
        session.with_feedback(TerminalBell)
    } else {
        session
    };

    app.run(&mut session)?;
    store.flush()?;

    if session.is_done() {
        print_summary(&session.summary(), quiet);
    } else if !quiet {
        println!(
            "Paused at card {} of {}. Run catswipe again to continue.",
            session.position() + 1,
            session.len()
        );
    }
    Ok(())
}

/// Handle the new command - forget progress and the deck
///
/// # Errors
///
/// Returns `CatswipeError` if the prompt or the store fails.
fn handle_new_command(store: &SledStore, quiet: bool) -> Result<()> {
    if !quiet {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Forget all progress and start a new deck?")
            .default(false)
            .interact()
            .map_err(|e| CatswipeError::IoError(std::io::Error::other(e.to_string())))?;
        if !confirmed {
            println!("Kept existing progress.");
            return Ok(());
        }
    }

    store.clear_all()?;
    if !quiet {
        println!("{}", "Progress cleared. A new deck will be built next time.".green());
    }
    Ok(())
}

/// Handle config subcommands
///
/// # Errors
///
/// Returns `CatswipeError` if the config path cannot be determined or serialized.
fn handle_config_command(command: &ConfigCommands, config: &SwipeConfig) -> Result<()> {
    match command {
        ConfigCommands::Path => println!("{}", SwipeConfig::config_path()?.display()),
        ConfigCommands::Show => print!("{}", config.to_toml()?),
    }
    Ok(())
}

/// Summary of stored progress, using the stored deck for the total
///
/// # Errors
///
/// Returns `CatswipeError` if the deck cannot be read.
fn stored_summary(store: &SledStore) -> Result<Summary> {
    let progress = Progress::load(store);
    let total = store.load_deck()?.map_or(0, |deck| deck.len());
    Ok(Summary {
        liked: progress.liked,
        disliked: progress.disliked,
        total,
    })
}

/// Print a summary; in quiet mode only the liked references are printed
fn print_summary(summary: &Summary, quiet: bool) {
    if quiet {
        for item in &summary.liked {
            println!("{item}");
        }
        return;
    }

    println!("{}", "=== Summary 🐱 ===".bold());
    println!("{}", summary.headline());

    if summary.liked.is_empty() {
        println!("No liked cats this round. 😼");
    } else {
        println!("\n{}", "Liked:".green().bold());
        for item in &summary.liked {
            println!("  ♥ {item}");
        }
    }

    if !summary.disliked.is_empty() {
        println!("\n{}", "Disliked:".red().bold());
        for item in &summary.disliked {
            println!("  ✗ {}", item.to_string().dimmed());
        }
    }

    let seen = summary.liked.len() + summary.disliked.len();
    if summary.total > seen {
        println!("\n{} of {} cards left.", summary.total - seen, summary.total);
    }
}
