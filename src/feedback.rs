//! Fire-and-forget feedback on committed swipes
//!
//! The session sends a `Pulse` on each commit. Implementations must never
//! fail the caller; a device without the capability simply ignores it.

use crate::session::Pulse;
use std::io::{self, Write};

/// Receiver of haptic/feedback hints
pub trait Feedback {
    /// Emit a pulse. Must not panic or block for long.
    fn pulse(&self, pulse: Pulse);
}

/// Feedback that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn pulse(&self, _pulse: Pulse) {}
}

/// Rings the terminal bell
///
/// Terminals have no notion of intensity, so like and dislike sound the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Feedback for TerminalBell {
    fn pulse(&self, pulse: Pulse) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::debug!(?pulse, error = %e, "terminal bell unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_feedback_is_silent() {
        NoFeedback.pulse(Pulse::Like);
        NoFeedback.pulse(Pulse::Dislike);
    }
}
