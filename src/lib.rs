//! Catswipe - a swipe-card terminal app for rating random cats
//!
//! The heart of the library is [`session::SwipeSession`], a small state
//! machine that tracks position, like/dislike outcomes, drag gestures, the
//! fly-out animation and a single-step undo. Progress is persisted through
//! the [`store::SessionStore`] trait; the [`ui`] module drives the session
//! from a ratatui terminal front end.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod feedback;
pub mod logging;
pub mod media;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CatswipeError {
    /// Storage error
    #[error("Storage error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),
}
