//! Color theme definitions for the swipe TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color of the LIKE hint and like button
    pub like: Color,
    /// Color of the NOPE hint
    pub nope: Color,
    /// Progress dot for already swiped items
    pub seen: Color,
    /// Progress dot for the item on screen
    pub current: Color,
    /// Progress dot for items still to come
    pub upcoming: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Accent color for the title and primary buttons
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            like: Color::Green,
            nope: Color::Red,
            seen: Color::LightCyan,
            current: Color::Cyan,
            upcoming: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            accent: Color::LightBlue,
        }
    }

    /// Style for the app title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the LIKE hint, stronger as the drag nears the threshold
    #[must_use]
    pub fn like_style(&self, strength: f64) -> Style {
        Self::hint_style(self.like, strength)
    }

    /// Style for the NOPE hint, stronger as the drag nears the threshold
    #[must_use]
    pub fn nope_style(&self, strength: f64) -> Style {
        Self::hint_style(self.nope, strength)
    }

    fn hint_style(color: Color, strength: f64) -> Style {
        let style = Style::default().fg(color);
        if strength >= 1.0 {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if strength >= 0.5 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }

    /// Style for a progress dot
    #[must_use]
    pub fn dot_style(&self, status: crate::session::ItemStatus) -> Style {
        use crate::session::ItemStatus;

        match status {
            ItemStatus::Seen => Style::default().fg(self.seen),
            ItemStatus::Current => Style::default()
                .fg(self.current)
                .add_modifier(Modifier::BOLD),
            ItemStatus::Upcoming => Style::default().fg(self.upcoming),
        }
    }

    /// Style for the primary button (Like, Start Over)
    #[must_use]
    pub fn primary_button_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for secondary buttons
    #[must_use]
    pub fn ghost_button_style(&self) -> Style {
        Style::default()
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.current).add_modifier(Modifier::BOLD)
    }
}
