//! Terminal front end for a swipe session
//!
//! Owns the terminal for the duration of a round: draws the session on
//! every tick, feeds input events into it, and completes pending fly-outs
//! once they are due.

use super::error::Result;
use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, HitAreas};
use super::theme::Theme;
use super::widgets::{
    Button, Card, HelpBar, ProgressDots, StatusBar, SummaryView, TopBar, button_row,
};
use crate::media::Prefetcher;
use crate::session::{Phase, SwipeSession};
use crate::store::SessionStore;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Flex, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Event poll timeout, roughly one frame
const TICK: Duration = Duration::from_millis(16);

/// Widest the card and summary get on large terminals
const MAX_CONTENT_WIDTH: u16 = 64;

/// How far past the container edge a card flies, as a fraction of its width
const FLY_OUT_DISTANCE: f64 = 1.2;

/// Ratatui-based swipe screen
pub struct SwipeApp {
    theme: Theme,
    prefetcher: Option<Prefetcher>,
    column_scale: i32,
}

impl SwipeApp {
    /// Create a new app; `column_scale` is distance units per terminal column
    #[must_use]
    pub fn new(column_scale: i32) -> Self {
        Self {
            theme: Theme::default(),
            prefetcher: None,
            column_scale,
        }
    }

    /// Show prefetch status on the card
    #[must_use]
    pub fn with_prefetcher(mut self, prefetcher: Prefetcher) -> Self {
        self.prefetcher = Some(prefetcher);
        self
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the swipe screen until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn to, or restored.
    pub fn run<S: SessionStore>(&self, session: &mut SwipeSession<S>) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut state = AppState::new(self.column_scale);

        let result = self.event_loop(&mut terminal, session, &mut state);
        session.finish_fly_out();
        Self::cleanup_terminal()?;
        result
    }

    fn event_loop<S: SessionStore>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut SwipeSession<S>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame, session, state))?;

            if poll_and_handle(session, state, TICK)? == EventResult::Quit {
                break;
            }
            session.poll(Instant::now());
            state.cleanup_messages();
        }
        Ok(())
    }

    /// Render the whole screen and record click targets in `state`
    pub fn render<S: SessionStore>(
        &self,
        frame: &mut Frame,
        session: &SwipeSession<S>,
        state: &mut AppState,
    ) {
        let [top, progress, body, buttons, status, help] = Layout::vertical([
            Constraint::Length(1), // Title + undo
            Constraint::Length(1), // Progress dots
            Constraint::Min(9),    // Card or summary
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Status message
            Constraint::Length(1), // Help bar
        ])
        .areas(frame.area());

        let [content] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(body);

        state.areas = HitAreas {
            undo: TopBar::undo_area(top),
            ..HitAreas::default()
        };
        frame.render_widget(TopBar::new(session.can_undo(), &self.theme), top);

        let hints = if session.is_done() {
            self.render_summary(frame, session, state, content, buttons);
            HelpBar::summary_hints()
        } else {
            self.render_swipe(frame, session, state, progress, content, buttons);
            HelpBar::swipe_hints()
        };

        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, &self.theme), status);
        frame.render_widget(HelpBar::new(&hints, &self.theme), help);
    }

    fn render_swipe<S: SessionStore>(
        &self,
        frame: &mut Frame,
        session: &SwipeSession<S>,
        state: &mut AppState,
        progress: Rect,
        content: Rect,
        buttons: Rect,
    ) {
        let statuses = (0..session.len()).map(|i| session.status_of(i)).collect();
        frame.render_widget(ProgressDots::new(statuses, &self.theme), progress);

        if let Some(item) = session.current_item() {
            let (shift, strength) = self.card_shift(session, state, content);
            let mut card = Card::new(item, session.position(), session.len(), &self.theme)
                .shift(shift, strength);
            if let Some(prefetcher) = &self.prefetcher {
                card = card.status(prefetcher.status(item));
            }
            frame.render_widget(card, content);
            state.areas.card = content;
        }

        let row = button_row(buttons, 2, 14);
        frame.render_widget(
            Button::new("👎 Dislike", self.theme.ghost_button_style()),
            row[0],
        );
        frame.render_widget(
            Button::new("👍 Like", self.theme.primary_button_style()),
            row[1],
        );
        state.areas.dislike = row[0];
        state.areas.like = row[1];
    }

    fn render_summary<S: SessionStore>(
        &self,
        frame: &mut Frame,
        session: &SwipeSession<S>,
        state: &mut AppState,
        content: Rect,
        buttons: Rect,
    ) {
        let summary = session.summary();
        frame.render_widget(SummaryView::new(&summary, &self.theme), content);

        let row = button_row(buttons, 1, 16);
        frame.render_widget(
            Button::new("Start Over", self.theme.primary_button_style()),
            row[0],
        );
        state.areas.start_over = row[0];
    }

    /// Horizontal card displacement in columns and hint strength
    ///
    /// While dragging the card follows the pointer. While flying out it is
    /// interpolated from the release point to just past the container edge.
    #[allow(clippy::cast_possible_truncation)]
    fn card_shift<S: SessionStore>(
        &self,
        session: &SwipeSession<S>,
        state: &AppState,
        content: Rect,
    ) -> (i32, f64) {
        let dragged = state.to_columns(session.drag_offset());

        let (Phase::AnimatingOut(direction), Some(fly_out)) =
            (session.phase(), session.pending_fly_out())
        else {
            return (dragged, session.drag_progress());
        };

        let total = session.settings().fly_out.as_secs_f64();
        let remaining = fly_out
            .due
            .saturating_duration_since(Instant::now())
            .as_secs_f64();
        let fraction = if total > 0.0 {
            (1.0 - remaining / total).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let target = f64::from(direction.sign()) * f64::from(content.width) * FLY_OUT_DISTANCE;
        let from = f64::from(dragged);
        ((from + (target - from) * fraction).round() as i32, 1.0)
    }
}
