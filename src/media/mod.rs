//! Media sources for the swipe deck
//!
//! A media source hands the session a fixed, ordered sequence of items at
//! start-up. The session never interprets the items; they are only shown
//! and recorded.

pub mod prefetch;

pub use prefetch::{MediaStatus, Prefetcher};

use crate::session::Item;

/// Default number of cards in a round
pub const DEFAULT_DECK_SIZE: usize = 14;

/// Default endpoint for random cat images
pub const CATAAS_URL: &str = "https://cataas.com/cat";

/// Supplier of the item sequence for a session
pub trait MediaSource {
    /// Build the deck for a new round
    fn items(&self) -> Vec<Item>;
}

/// Random cat images from cataas.com
///
/// Every URL carries a unique `random` query parameter so that the image
/// service (and any cache in between) returns a different cat per card.
#[derive(Debug, Clone)]
pub struct CataasSource {
    count: usize,
    base_url: String,
}

impl CataasSource {
    /// Create a source producing `count` items
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            base_url: CATAAS_URL.to_string(),
        }
    }

    /// Point the source at a different endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for CataasSource {
    fn default() -> Self {
        Self::new(DEFAULT_DECK_SIZE)
    }
}

impl MediaSource for CataasSource {
    fn items(&self) -> Vec<Item> {
        let millis = chrono::Utc::now().timestamp_millis();
        (0..self.count)
            .map(|i| {
                let nonce = uuid::Uuid::new_v4().simple();
                Item::new(format!("{}?random={millis}_{i}_{nonce}", self.base_url))
            })
            .collect()
    }
}

/// A fixed, pre-built deck
#[derive(Debug, Clone, Default)]
pub struct FixedSource(pub Vec<Item>);

impl MediaSource for FixedSource {
    fn items(&self) -> Vec<Item> {
        self.0.clone()
    }
}
