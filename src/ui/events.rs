//! Event handling for the swipe TUI
//!
//! Maps keyboard and mouse events to `Action`s and applies them to the
//! session. Mapping and application are separate so both can be tested
//! without a terminal.

use super::error::{Result, UiError};
use super::state::{AppState, HitAreas, MessageLevel};
use crate::session::{Direction, Item, SwipeSession};
use crate::store::SessionStore;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Commit a swipe via key or button
    Swipe(Direction),
    Undo,
    /// Start the round over
    Reset,
    /// Open the current item in the system viewer
    Open,
    Quit,
    /// Pointer pressed on the card at this drag coordinate
    BeginDrag(i32),
    /// Pointer moved to this drag coordinate
    UpdateDrag(i32),
    /// Pointer released at this drag coordinate
    EndDrag(i32),
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the app
    Quit,
    /// No action taken
    Ignored,
}

/// Map a key press to an action
///
/// Swipe keys do nothing on the summary screen; reset is only offered there.
#[must_use]
pub fn map_key(key: KeyEvent, done: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        (KeyCode::Left | KeyCode::Char('h'), _) if !done => Some(Action::Swipe(Direction::Left)),
        (KeyCode::Right | KeyCode::Char('l'), _) if !done => Some(Action::Swipe(Direction::Right)),
        (KeyCode::Char('u') | KeyCode::Backspace, _) => Some(Action::Undo),
        (KeyCode::Char('r') | KeyCode::Enter, _) if done => Some(Action::Reset),
        (KeyCode::Char('o'), _) if !done => Some(Action::Open),
        _ => None,
    }
}

/// Map a mouse event to an action using the click targets from the last render
#[must_use]
pub fn map_mouse(mouse: MouseEvent, state: &AppState, done: bool) -> Option<Action> {
    let areas = &state.areas;
    let (column, row) = (mouse.column, mouse.row);
    let x = state.to_distance(column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if HitAreas::hit(areas.undo, column, row) {
                Some(Action::Undo)
            } else if done {
                HitAreas::hit(areas.start_over, column, row).then_some(Action::Reset)
            } else if HitAreas::hit(areas.dislike, column, row) {
                Some(Action::Swipe(Direction::Left))
            } else if HitAreas::hit(areas.like, column, row) {
                Some(Action::Swipe(Direction::Right))
            } else if HitAreas::hit(areas.card, column, row) {
                Some(Action::BeginDrag(x))
            } else {
                None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => Some(Action::UpdateDrag(x)),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::EndDrag(x)),
        _ => None,
    }
}

/// Apply an action to the session
pub fn apply<S: SessionStore>(
    session: &mut SwipeSession<S>,
    state: &mut AppState,
    action: Action,
) -> EventResult {
    match action {
        Action::Quit => {
            state.should_exit = true;
            return EventResult::Quit;
        }
        Action::Swipe(direction) => {
            if session.commit_swipe(direction).is_none() {
                return EventResult::Ignored;
            }
        }
        Action::Undo => {
            if !session.undo() {
                return EventResult::Ignored;
            }
            state.add_message(MessageLevel::Info, "Undid last swipe");
        }
        Action::Reset => {
            session.reset();
            state.add_message(MessageLevel::Info, "Starting over");
        }
        Action::Open => {
            let Some(item) = session.current_item() else {
                return EventResult::Ignored;
            };
            match open_item(item) {
                Ok(()) => state.add_message(MessageLevel::Success, "Opened in viewer"),
                Err(e) => state.add_message(MessageLevel::Error, e.to_string()),
            }
        }
        Action::BeginDrag(x) => session.begin_drag(x),
        Action::UpdateDrag(x) => {
            if !session.update_drag(x) {
                return EventResult::Ignored;
            }
        }
        Action::EndDrag(x) => {
            if !session.is_dragging() {
                return EventResult::Ignored;
            }
            let _ = session.end_drag(x);
        }
    }
    EventResult::Continue
}

/// Open an item with the system's default handler
///
/// # Errors
///
/// Returns `UiError::OpenError` if no handler could be launched.
pub fn open_item(item: &Item) -> Result<()> {
    open::that(item.as_str()).map_err(|source| UiError::OpenError {
        item: item.to_string(),
        source,
    })
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle<S: SessionStore>(
    session: &mut SwipeSession<S>,
    state: &mut AppState,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let done = session.is_done();
    let action = match event::read()? {
        Event::Key(key) => map_key(key, done),
        Event::Mouse(mouse) => map_mouse(mouse, state, done),
        Event::FocusLost => {
            session.cancel_drag();
            None
        }
        _ => None,
    };

    Ok(action.map_or(EventResult::Ignored, |action| apply(session, state, action)))
}
