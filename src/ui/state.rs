//! Front-end state for the swipe TUI
//!
//! Everything the session does not own: status messages, click targets
//! recorded during the last render, and the column-to-distance scale used
//! to turn mouse columns into drag coordinates.

use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Screen regions that react to mouse clicks, refreshed on every render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub card: Rect,
    pub undo: Rect,
    pub like: Rect,
    pub dislike: Rect,
    pub start_over: Rect,
}

impl HitAreas {
    /// Whether the cell at (`column`, `row`) lies in `area`
    #[must_use]
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

/// Application state for the swipe screen
#[derive(Debug)]
pub struct AppState {
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the app should exit
    pub should_exit: bool,
    /// Distance units per terminal column
    pub column_scale: i32,
    /// Click targets from the last render
    pub areas: HitAreas,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(column_scale: i32) -> Self {
        Self {
            messages: Vec::new(),
            message_ttl: Duration::from_secs(3),
            should_exit: false,
            column_scale: column_scale.max(1),
            areas: HitAreas::default(),
        }
    }

    /// Convert a terminal column into a drag coordinate
    #[must_use]
    pub fn to_distance(&self, column: u16) -> i32 {
        i32::from(column) * self.column_scale
    }

    /// Convert a drag offset into whole terminal columns
    #[must_use]
    pub fn to_columns(&self, offset: i32) -> i32 {
        offset / self.column_scale
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}
