//! Terminal user interface
//!
//! A ratatui front end for [`SwipeSession`](crate::session::SwipeSession).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 SwipeApp                    │
//! │      (terminal setup, draw/poll loop)       │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   events   │ │  widgets  │ │   state   │
//! │ (→ Action) │ │ (ratatui) │ │ (targets) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Mouse columns are scaled into drag coordinates so the session's swipe
//! threshold keeps its meaning regardless of terminal cell size.

mod app;
mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::SwipeApp;
pub use error::{Result, UiError};
