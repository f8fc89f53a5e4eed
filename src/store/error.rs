//! Storage-specific error types
//!
//! This module defines the errors that can occur while reading or writing
//! session progress and the stored deck.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures for the deck
//! - **`Utf8Error`**: A stored progress value was not valid UTF-8

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Stored value is not text
    #[error("Stored value is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
