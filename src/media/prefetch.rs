//! Background prefetch of deck media
//!
//! Prefetching is fire-and-forget: every item is fetched in parallel on a
//! background thread and its status recorded in a cache. Nothing here
//! touches session state, and failures are only logged.

use crate::session::Item;
use moka::sync::Cache;
use rayon::prelude::*;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Load status of a deck item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    /// Not fetched yet
    Pending,
    /// Fetched successfully
    Ready { bytes: u64 },
    /// Fetch failed; the display layer shows a placeholder
    Failed,
}

impl MediaStatus {
    /// Short human-readable label
    #[must_use]
    pub fn label(self) -> String {
        use byte_unit::{Byte, UnitType};

        match self {
            Self::Pending => "loading…".to_string(),
            Self::Ready { bytes } => {
                let size = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
                format!("ready ({size:.1})")
            }
            Self::Failed => "unavailable".to_string(),
        }
    }
}

/// Prefetcher with a shared status cache
#[derive(Clone)]
pub struct Prefetcher {
    statuses: Cache<Item, MediaStatus>,
}

impl Prefetcher {
    /// Create a prefetcher sized for `capacity` items
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let statuses = Cache::builder().max_capacity(capacity as u64).build();
        Self { statuses }
    }

    /// Status of an item; unknown items are `Pending`
    #[must_use]
    pub fn status(&self, item: &Item) -> MediaStatus {
        self.statuses.get(item).unwrap_or(MediaStatus::Pending)
    }

    /// Fetch every item over HTTP in the background
    pub fn spawn(&self, items: Vec<Item>) -> JoinHandle<()> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build();
        match client {
            Ok(client) => self.spawn_with(items, move |item| fetch(&client, item)),
            Err(e) => {
                tracing::debug!(error = %e, "prefetch disabled, HTTP client unavailable");
                self.spawn_with(items, |_| MediaStatus::Failed)
            }
        }
    }

    /// Run `fetch` for every item in the background
    pub fn spawn_with<F>(&self, items: Vec<Item>, fetch: F) -> JoinHandle<()>
    where
        F: Fn(&Item) -> MediaStatus + Send + Sync + 'static,
    {
        let statuses = self.statuses.clone();
        thread::spawn(move || {
            items.par_iter().for_each(|item| {
                let status = fetch(item);
                statuses.insert(item.clone(), status);
            });
        })
    }
}

fn fetch(client: &reqwest::blocking::Client, item: &Item) -> MediaStatus {
    let result = client
        .get(item.as_str())
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::bytes);

    match result {
        Ok(body) => MediaStatus::Ready {
            bytes: body.len() as u64,
        },
        Err(e) => {
            tracing::debug!(item = %item, error = %e, "prefetch failed");
            MediaStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_item_is_pending() {
        let prefetcher = Prefetcher::new(4);
        assert_eq!(prefetcher.status(&Item::new("a")), MediaStatus::Pending);
    }

    #[test]
    fn test_spawn_with_records_status() {
        let prefetcher = Prefetcher::new(4);
        let items = vec![Item::new("good"), Item::new("bad")];

        prefetcher
            .spawn_with(items, |item| {
                if item.as_str() == "good" {
                    MediaStatus::Ready { bytes: 2048 }
                } else {
                    MediaStatus::Failed
                }
            })
            .join()
            .unwrap();

        assert_eq!(
            prefetcher.status(&Item::new("good")),
            MediaStatus::Ready { bytes: 2048 }
        );
        assert_eq!(prefetcher.status(&Item::new("bad")), MediaStatus::Failed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MediaStatus::Pending.label(), "loading…");
        assert_eq!(MediaStatus::Failed.label(), "unavailable");
        assert!(MediaStatus::Ready { bytes: 2048 }.label().starts_with("ready (2"));
    }
}
