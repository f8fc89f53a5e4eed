//! Durable key-value storage for session progress
//!
//! Progress is kept under three keys:
//! - `ct_index`: the current position as a decimal number
//! - `ct_liked`: JSON array of liked item references
//! - `ct_disliked`: JSON array of disliked item references
//!
//! Reading never fails from the caller's point of view: missing or
//! unparseable values fall back to position 0 and empty sequences.

pub mod error;
pub mod sled_store;

pub use error::StoreError;
pub use sled_store::SledStore;

use crate::session::Item;
use std::cell::RefCell;
use std::collections::HashMap;

/// Keys under which progress is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressKey {
    Position,
    Liked,
    Disliked,
}

impl ProgressKey {
    /// All keys, in write order
    pub const ALL: [Self; 3] = [Self::Position, Self::Liked, Self::Disliked];

    /// Storage key name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "ct_index",
            Self::Liked => "ct_liked",
            Self::Disliked => "ct_disliked",
        }
    }
}

/// Minimal string key-value store the session persists into
pub trait SessionStore {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn read(&self, key: ProgressKey) -> Result<Option<String>, StoreError>;

    /// Write the raw value for `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn write(&self, key: ProgressKey, value: &str) -> Result<(), StoreError>;

    /// Remove all three progress keys
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn read(&self, key: ProgressKey) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: ProgressKey, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store, used for ephemeral sessions and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<ProgressKey, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values
    #[must_use]
    pub fn with_values(values: &[(ProgressKey, &str)]) -> Self {
        let store = Self::new();
        {
            let mut map = store.values.borrow_mut();
            for (key, value) in values {
                map.insert(*key, (*value).to_string());
            }
        }
        store
    }

    /// Raw value currently stored for `key`
    #[must_use]
    pub fn raw(&self, key: ProgressKey) -> Option<String> {
        self.values.borrow().get(&key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: ProgressKey) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: ProgressKey, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.values.borrow_mut().clear();
        Ok(())
    }
}

/// Progress triple as read from a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub liked: Vec<Item>,
    pub disliked: Vec<Item>,
}

impl Progress {
    /// Load progress, defaulting every value that is absent or malformed
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        let position = read_key(store, ProgressKey::Position)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);

        Self {
            position,
            liked: read_items(store, ProgressKey::Liked),
            disliked: read_items(store, ProgressKey::Disliked),
        }
    }

    /// Advance past an outcome whose fly-out never completed
    ///
    /// Outcomes are written on commit and the position only once the card
    /// has flown out, so a process that stopped mid-animation leaves exactly
    /// one more outcome than the position accounts for.
    #[must_use]
    pub fn catch_up(mut self) -> Self {
        if self.liked.len() + self.disliked.len() == self.position + 1 {
            self.position += 1;
        }
        self
    }

    /// Whether this progress can describe a deck of `len` items
    #[must_use]
    pub fn fits(&self, len: usize) -> bool {
        self.position <= len && self.liked.len() + self.disliked.len() == self.position
    }
}

/// Encode the position value
#[must_use]
pub fn encode_position(position: usize) -> String {
    position.to_string()
}

/// Encode an outcome sequence as a JSON array of references
#[must_use]
pub fn encode_items(items: &[Item]) -> String {
    // Serializing a slice of plain strings cannot fail
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn read_key<S: SessionStore + ?Sized>(store: &S, key: ProgressKey) -> Option<String> {
    match store.read(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = key.as_str(), error = %e, "failed to read stored progress");
            None
        }
    }
}

fn read_items<S: SessionStore + ?Sized>(store: &S, key: ProgressKey) -> Vec<Item> {
    let Some(raw) = read_key(store, key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key = key.as_str(), error = %e, "discarding malformed stored sequence");
            Vec::new()
        }
    }
}
