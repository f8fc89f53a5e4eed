//! Testing utilities for catswipe
//!
//! Provides a `TestStore` wrapper that opens a sled store in a temporary
//! directory, plus a feedback recorder for asserting haptic hints.
//!
//! Only available when compiled with `cfg(test)`.

use crate::feedback::Feedback;
use crate::session::Pulse;
use crate::store::SledStore;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Wrapper for a temporary sled store that cleans up on drop
///
/// # Panics
/// Construction panics if the temporary directory or database cannot be created.
pub struct TestStore {
    // Field order matters: the store must close before the directory goes away
    store: SledStore,
    dir: TempDir,
}

impl TestStore {
    /// Create a new store in a fresh temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SledStore::open(dir.path().join("db")).expect("Failed to open test store");
        Self { store, dir }
    }

    /// Get a reference to the underlying store
    #[must_use]
    pub const fn store(&self) -> &SledStore {
        &self.store
    }

    /// Path of the temporary directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Feedback sink that records every pulse it receives
#[derive(Clone, Default)]
pub struct RecordingFeedback {
    pulses: Arc<Mutex<Vec<Pulse>>>,
}

impl RecordingFeedback {
    /// Pulses received so far
    pub fn pulses(&self) -> Vec<Pulse> {
        self.pulses.lock().expect("feedback lock poisoned").clone()
    }
}

impl Feedback for RecordingFeedback {
    fn pulse(&self, pulse: Pulse) {
        self.pulses.lock().expect("feedback lock poisoned").push(pulse);
    }
}
