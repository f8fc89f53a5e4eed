//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for catswipe using the `clap` crate.
//!
//! # Commands
//!
//! - **play**: Swipe through the deck in the terminal (default)
//! - **summary**: Print the stored liked/disliked lists
//! - **new**: Forget progress and the stored deck
//! - **config**: Show the configuration file location or contents
//!
//! # Examples
//!
//! ```
//! use catswipe::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["catswipe", "play", "--count", "5"]);
//! assert!(matches!(cli.get_command(), Commands::Play { count: Some(5) }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "catswipe")]
#[command(about = "Swipe right on cats", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Database directory (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Swipe through the deck (default)
    #[command(visible_alias = "p")]
    Play {
        /// Number of cards when a new deck is built
        #[arg(short = 'n', long = "count", value_name = "N")]
        count: Option<usize>,
    },

    /// Print what has been liked and disliked so far
    #[command(visible_alias = "s")]
    Summary,

    /// Forget progress and build a new deck next time
    New,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path,

    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Play if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Play { count: None })
    }
}
