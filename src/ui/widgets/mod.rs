//! Ratatui widgets for the swipe screen
//!
//! Custom widgets for rendering the card, progress row, buttons and the
//! end-of-round summary.

mod button;
mod card;
mod help_bar;
mod progress;
mod status_bar;
mod summary;
mod top_bar;

pub use button::{Button, button_row};
pub use card::{Card, shifted};
pub use help_bar::{HelpBar, KeyHint};
pub use progress::ProgressDots;
pub use status_bar::StatusBar;
pub use summary::SummaryView;
pub use top_bar::TopBar;
