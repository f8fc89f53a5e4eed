//! sled-backed progress store
//!
//! Uses two sled trees:
//! - `progress`: the three progress keys as UTF-8 values
//! - `deck`: the bincode-encoded item sequence of the current round, so a
//!   resumed session shows the same items it was swiping through

use super::{ProgressKey, SessionStore, StoreError};
use crate::session::Item;
use sled::{Db, Tree};
use std::path::Path;

const DECK_KEY: &[u8] = b"items";

/// Durable store wrapping a sled database
pub struct SledStore {
    db: Db,
    progress: Tree,
    deck: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use catswipe::store::SledStore;
    /// let store = SledStore::open("catswipe_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or if the internal trees cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let progress = db.open_tree("progress")?;
        let deck = db.open_tree("deck")?;
        Ok(Self { db, progress, deck })
    }

    /// Load the stored deck, if one was saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails or the stored deck cannot be decoded.
    pub fn load_deck(&self) -> Result<Option<Vec<Item>>, StoreError> {
        match self.deck.get(DECK_KEY)? {
            Some(value) => {
                let (items, _): (Vec<Item>, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Replace the stored deck
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the write fails.
    pub fn save_deck(&self, items: &[Item]) -> Result<(), StoreError> {
        let value = bincode::encode_to_vec(items, bincode::config::standard())?;
        self.deck.insert(DECK_KEY, value)?;
        self.deck.flush()?;
        Ok(())
    }

    /// Start a new round on `items`, forgetting progress made on the old deck
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if progress cannot be cleared or the deck cannot be written.
    pub fn replace_deck(&self, items: &[Item]) -> Result<(), StoreError> {
        self.clear()?;
        self.save_deck(items)
    }

    /// Remove progress and the stored deck
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either tree cannot be cleared.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.progress.clear()?;
        self.deck.clear()?;
        self.db.flush()?;
        Ok(())
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}

impl SessionStore for SledStore {
    fn read(&self, key: ProgressKey) -> Result<Option<String>, StoreError> {
        match self.progress.get(key.as_str())? {
            Some(value) => Ok(Some(String::from_utf8(value.to_vec())?)),
            None => Ok(None),
        }
    }

    fn write(&self, key: ProgressKey, value: &str) -> Result<(), StoreError> {
        self.progress.insert(key.as_str(), value.as_bytes())?;
        self.progress.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        for key in ProgressKey::ALL {
            self.progress.remove(key.as_str())?;
        }
        self.progress.flush()?;
        Ok(())
    }
}
