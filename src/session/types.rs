//! Value types shared by the swipe session and its collaborators

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Opaque reference to a piece of fetchable media (usually a URL)
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Create a new item from any string-like reference
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Borrow the underlying reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Direction a card leaves the screen in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Swipe left (dislike)
    Left,
    /// Swipe right (like)
    Right,
}

impl Direction {
    /// Outcome recorded for a swipe in this direction
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Left => Outcome::Disliked,
            Self::Right => Outcome::Liked,
        }
    }

    /// Sign of horizontal travel (-1 for left, 1 for right)
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Like/dislike classification of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Liked,
    Disliked,
}

/// Animation phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for drag input or an explicit swipe
    Active,
    /// A swipe was committed and the card is flying out
    AnimatingOut(Direction),
    /// Every item has an outcome
    Done,
}

/// Transient drag bookkeeping, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Coordinate where the drag began, `None` when not dragging
    pub start: Option<i32>,
    /// Current horizontal offset from the start coordinate
    pub offset: i32,
}

/// The single pending undo record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    pub item: Item,
    pub outcome: Outcome,
}

/// Scheduled completion of a fly-out animation
///
/// Returned by a committed swipe. The session only honours the token
/// belonging to its current generation, so a token that outlives a reset
/// does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyOut {
    pub(crate) generation: u64,
    /// Instant after which the completion may run
    pub due: Instant,
    /// Direction the card is flying in
    pub direction: Direction,
}

/// Display status of an item relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Already swiped
    Seen,
    /// On screen now
    Current,
    /// Still to come
    Upcoming,
}

/// Haptic pulse strength hint sent on each commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Like,
    Dislike,
}

impl Pulse {
    /// Vibration length for devices that support it
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Like => Duration::from_millis(20),
            Self::Dislike => Duration::from_millis(15),
        }
    }
}

impl From<Direction> for Pulse {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Dislike,
            Direction::Right => Self::Like,
        }
    }
}

/// Tunables for a swipe session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Drag distance that must be exceeded to commit a swipe
    pub threshold: i32,
    /// Length of the fly-out animation
    pub fly_out: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            threshold: 70,
            fly_out: Duration::from_millis(220),
        }
    }
}

/// End-of-round tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub liked: Vec<Item>,
    pub disliked: Vec<Item>,
    pub total: usize,
}

impl Summary {
    /// One-line description, e.g. "You liked 2 cats and disliked 1."
    #[must_use]
    pub fn headline(&self) -> String {
        let liked = self.liked.len();
        let plural = if liked == 1 { "" } else { "s" };
        format!(
            "You liked {liked} cat{plural} and disliked {}.",
            self.disliked.len()
        )
    }
}
