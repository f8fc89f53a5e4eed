//! Swipe session state machine
//!
//! `SwipeSession` owns the deck, the position, both outcome sequences, the
//! drag state, the animation phase and the single undo slot.
//!
//! # State machine
//!
//! ```text
//!            commit_swipe                 fly-out completes
//!  Active ─────────────────▶ AnimatingOut ──────────────────▶ Active
//!    ▲                                         │ (last item)
//!    │ reset / undo                            ▼
//!    └──────────────────────────────────────  Done
//! ```
//!
//! Invalid calls are no-ops. The fly-out completion is a `FlyOut` value
//! rather than a callback: the caller either hands it back through
//! `complete_fly_out` or lets `poll` run it once due. Every commit and reset
//! bumps the session generation, so a stale token can never advance a
//! session that has since been reset.

pub mod types;

pub use types::{
    Direction, DragState, FlyOut, Item, ItemStatus, Outcome, Phase, Pulse, SessionSettings,
    Summary, UndoRecord,
};

use crate::feedback::{Feedback, NoFeedback};
use crate::store::{encode_items, encode_position, Progress, ProgressKey, SessionStore};
use std::time::Instant;

/// Single-user swipe session over a fixed deck
pub struct SwipeSession<S: SessionStore> {
    items: Vec<Item>,
    position: usize,
    liked: Vec<Item>,
    disliked: Vec<Item>,
    drag: DragState,
    phase: Phase,
    undo: Option<UndoRecord>,
    pending: Option<FlyOut>,
    generation: u64,
    settings: SessionSettings,
    store: S,
    feedback: Box<dyn Feedback>,
}

impl<S: SessionStore> SwipeSession<S> {
    /// Create a session over `items`, restoring progress from `store`
    ///
    /// Stored progress that does not describe this deck (position past the
    /// end, or outcome counts that disagree with the position) is discarded.
    /// A swipe whose fly-out never completed counts as completed.
    pub fn new(items: Vec<Item>, store: S, settings: SessionSettings) -> Self {
        let stored = Progress::load(&store);
        let stored_position = stored.position;
        let mut progress = stored.catch_up();
        if !progress.fits(items.len()) {
            tracing::warn!(
                position = progress.position,
                liked = progress.liked.len(),
                disliked = progress.disliked.len(),
                deck = items.len(),
                "stored progress does not match deck, starting fresh"
            );
            progress = Progress::default();
        }

        let mut session = Self {
            items,
            position: progress.position,
            liked: progress.liked,
            disliked: progress.disliked,
            drag: DragState::default(),
            phase: Phase::Active,
            undo: None,
            pending: None,
            generation: 0,
            settings,
            store,
            feedback: Box::new(NoFeedback),
        };
        session.settle_phase();
        if session.position != stored_position && session.position > 0 {
            session.persist(ProgressKey::Position);
        }
        session
    }

    /// Attach a feedback sink for commit pulses
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Feedback + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    // ----- queries -----

    /// The full deck
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the deck
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deck is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item on screen
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Item on screen, `None` once done
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.position)
    }

    #[must_use]
    pub fn liked(&self) -> &[Item] {
        &self.liked
    }

    #[must_use]
    pub fn disliked(&self) -> &[Item] {
        &self.disliked
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Whether `undo` would do anything right now
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.is_some() && !matches!(self.phase, Phase::AnimatingOut(_))
    }

    /// Current horizontal drag offset
    #[must_use]
    pub const fn drag_offset(&self) -> i32 {
        self.drag.offset
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.start.is_some()
    }

    /// How far the current drag is towards committing, in `[0.0, 1.0]`
    #[must_use]
    pub fn drag_progress(&self) -> f64 {
        if self.settings.threshold <= 0 {
            return if self.drag.offset == 0 { 0.0 } else { 1.0 };
        }
        (f64::from(self.drag.offset.unsigned_abs()) / f64::from(self.settings.threshold)).min(1.0)
    }

    /// Pending fly-out, if a swipe is animating
    #[must_use]
    pub const fn pending_fly_out(&self) -> Option<FlyOut> {
        self.pending
    }

    /// Display status of the item at `index`
    #[must_use]
    pub fn status_of(&self, index: usize) -> ItemStatus {
        match index.cmp(&self.position) {
            std::cmp::Ordering::Less => ItemStatus::Seen,
            std::cmp::Ordering::Equal => ItemStatus::Current,
            std::cmp::Ordering::Greater => ItemStatus::Upcoming,
        }
    }

    #[must_use]
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tally of the round so far
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            liked: self.liked.clone(),
            disliked: self.disliked.clone(),
            total: self.items.len(),
        }
    }

    // ----- drag -----

    /// Start a drag at coordinate `x`
    pub fn begin_drag(&mut self, x: i32) {
        if self.phase != Phase::Active || self.drag.start.is_some() {
            return;
        }
        self.drag = DragState {
            start: Some(x),
            offset: 0,
        };
    }

    /// Move an in-progress drag to `x`
    ///
    /// Returns `true` when the offset changed and the card should be redrawn.
    pub fn update_drag(&mut self, x: i32) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let Some(start) = self.drag.start else {
            return false;
        };
        let offset = x.saturating_sub(start);
        let changed = offset != self.drag.offset;
        self.drag.offset = offset;
        changed
    }

    /// Release a drag at `x`, committing a swipe if it travelled far enough
    pub fn end_drag(&mut self, x: i32) -> Option<FlyOut> {
        self.end_drag_at(x, Instant::now())
    }

    /// `end_drag` with an explicit clock
    pub fn end_drag_at(&mut self, x: i32, now: Instant) -> Option<FlyOut> {
        if self.phase != Phase::Active {
            return None;
        }
        let start = self.drag.start.take()?;
        let diff = x.saturating_sub(start);
        let threshold = self.settings.threshold;

        if diff > threshold {
            self.commit_swipe_at(Direction::Right, now)
        } else if diff < threshold.saturating_neg() {
            self.commit_swipe_at(Direction::Left, now)
        } else {
            self.drag.offset = 0;
            None
        }
    }

    /// Drop an in-progress drag without committing
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::default();
    }

    // ----- swipes -----

    /// Commit a swipe of the current item
    ///
    /// Ignored unless the session is `Active`. Returns the scheduled fly-out.
    pub fn commit_swipe(&mut self, direction: Direction) -> Option<FlyOut> {
        self.commit_swipe_at(direction, Instant::now())
    }

    /// `commit_swipe` with an explicit clock
    pub fn commit_swipe_at(&mut self, direction: Direction, now: Instant) -> Option<FlyOut> {
        if self.phase != Phase::Active {
            return None;
        }
        let item = self.current_item()?.clone();
        let outcome = direction.outcome();

        self.undo = Some(UndoRecord {
            item: item.clone(),
            outcome,
        });

        match outcome {
            Outcome::Liked => self.liked.push(item),
            Outcome::Disliked => self.disliked.push(item),
        }
        self.persist(outcome_key(outcome));

        self.feedback.pulse(Pulse::from(direction));

        self.phase = Phase::AnimatingOut(direction);
        self.drag.start = None;
        self.generation += 1;
        let fly_out = FlyOut {
            generation: self.generation,
            due: now + self.settings.fly_out,
            direction,
        };
        self.pending = Some(fly_out);

        tracing::debug!(position = self.position, ?direction, "swipe committed");
        Some(fly_out)
    }

    /// Run the fly-out completion named by `token`
    ///
    /// Returns `true` if the session advanced. Tokens from an earlier
    /// generation are ignored.
    pub fn complete_fly_out(&mut self, token: FlyOut) -> bool {
        match self.pending {
            Some(pending) if pending.generation == token.generation => {}
            _ => {
                tracing::trace!(generation = token.generation, "ignoring stale fly-out");
                return false;
            }
        }
        self.pending = None;

        self.position = (self.position + 1).min(self.items.len());
        self.drag = DragState::default();
        self.phase = Phase::Active;
        self.settle_phase();
        self.persist(ProgressKey::Position);
        true
    }

    /// Complete the pending fly-out if it is due at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.due <= now => self.complete_fly_out(pending),
            _ => false,
        }
    }

    /// Complete the pending fly-out immediately, ignoring its due time
    ///
    /// Used when the front end shuts down mid-animation so the stored
    /// position agrees with the stored outcomes.
    pub fn finish_fly_out(&mut self) -> bool {
        match self.pending {
            Some(pending) => self.complete_fly_out(pending),
            None => false,
        }
    }

    /// Take back the most recent swipe
    ///
    /// Single use: the slot is cleared, so a second undo is a no-op. Blocked
    /// while a card is flying out.
    pub fn undo(&mut self) -> bool {
        if matches!(self.phase, Phase::AnimatingOut(_)) {
            return false;
        }
        let Some(record) = self.undo.take() else {
            return false;
        };

        self.position = self.position.saturating_sub(1);
        let sequence = match record.outcome {
            Outcome::Liked => &mut self.liked,
            Outcome::Disliked => &mut self.disliked,
        };
        // Deck items are unique, so this is the entry the swipe added
        if let Some(index) = sequence.iter().rposition(|item| item == &record.item) {
            sequence.remove(index);
        }

        self.drag = DragState::default();
        self.phase = Phase::Active;
        self.settle_phase();
        self.persist(ProgressKey::Position);
        self.persist(outcome_key(record.outcome));

        tracing::debug!(position = self.position, item = %record.item, "swipe undone");
        true
    }

    /// Start the round over with the same deck
    pub fn reset(&mut self) {
        self.position = 0;
        self.liked.clear();
        self.disliked.clear();
        self.undo = None;
        self.drag = DragState::default();
        self.pending = None;
        self.generation += 1;
        self.phase = Phase::Active;
        self.settle_phase();
        for key in ProgressKey::ALL {
            self.persist(key);
        }
        tracing::debug!("session reset");
    }

    // ----- internals -----

    fn settle_phase(&mut self) {
        if self.phase == Phase::Active && self.position >= self.items.len() {
            self.phase = Phase::Done;
        }
    }

    fn persist(&self, key: ProgressKey) {
        let value = match key {
            ProgressKey::Position => encode_position(self.position),
            ProgressKey::Liked => encode_items(&self.liked),
            ProgressKey::Disliked => encode_items(&self.disliked),
        };
        if let Err(e) = self.store.write(key, &value) {
            tracing::warn!(key = key.as_str(), error = %e, "failed to persist progress");
        }
    }
}

const fn outcome_key(outcome: Outcome) -> ProgressKey {
    match outcome {
        Outcome::Liked => ProgressKey::Liked,
        Outcome::Disliked => ProgressKey::Disliked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::testing::RecordingFeedback;
    use std::time::Duration;

    fn deck(names: &[&str]) -> Vec<Item> {
        names.iter().map(|n| Item::new(*n)).collect()
    }

    fn session<'a>(store: &'a MemoryStore, names: &[&str]) -> SwipeSession<&'a MemoryStore> {
        SwipeSession::new(deck(names), store, SessionSettings::default())
    }

    /// Commit and immediately finish the animation
    fn swipe<S: SessionStore>(session: &mut SwipeSession<S>, direction: Direction) {
        let token = session.commit_swipe(direction).expect("swipe should commit");
        assert!(session.complete_fly_out(token));
    }

    fn assert_invariants<S: SessionStore>(session: &SwipeSession<S>) {
        assert!(session.position() <= session.len());
        assert_eq!(session.position() == session.len(), session.is_done());
        if !matches!(session.phase(), Phase::AnimatingOut(_)) {
            assert_eq!(
                session.liked().len() + session.disliked().len(),
                session.position()
            );
        }
    }

    #[test]
    fn test_new_session_is_active() {
        let store = MemoryStore::new();
        let s = session(&store, &["a", "b"]);
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.position(), 0);
        assert_eq!(s.current_item(), Some(&Item::new("a")));
        assert!(!s.can_undo());
        assert_invariants(&s);
    }

    #[test]
    fn test_empty_deck_is_done() {
        let store = MemoryStore::new();
        let s = session(&store, &[]);
        assert!(s.is_done());
        assert!(s.current_item().is_none());
    }

    #[test]
    fn test_commit_enters_animating_out() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        let token = s.commit_swipe(Direction::Right).unwrap();
        assert_eq!(s.phase(), Phase::AnimatingOut(Direction::Right));
        assert_eq!(token.direction, Direction::Right);
        assert_eq!(s.liked(), &[Item::new("a")]);
        assert_eq!(s.position(), 0);
        assert!(!s.can_undo());

        assert!(s.complete_fly_out(token));
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.position(), 1);
        assert!(s.can_undo());
        assert_invariants(&s);
    }

    #[test]
    fn test_commit_ignored_while_animating() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);

        let token = s.commit_swipe(Direction::Right).unwrap();
        assert!(s.commit_swipe(Direction::Left).is_none());
        assert!(s.commit_swipe(Direction::Right).is_none());
        assert_eq!(s.liked().len(), 1);
        assert!(s.disliked().is_empty());
        assert_eq!(s.position(), 0);

        s.complete_fly_out(token);
        assert_eq!(s.position(), 1);
        assert_invariants(&s);
    }

    #[test]
    fn test_commit_ignored_when_done() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a"]);
        swipe(&mut s, Direction::Left);
        assert!(s.is_done());
        assert!(s.commit_swipe(Direction::Right).is_none());
        assert!(s.liked().is_empty());
        assert_invariants(&s);
    }

    #[test]
    fn test_poll_respects_delay() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);
        let now = Instant::now();

        let token = s.commit_swipe_at(Direction::Left, now).unwrap();
        assert_eq!(token.due, now + Duration::from_millis(220));

        assert!(!s.poll(now + Duration::from_millis(100)));
        assert_eq!(s.position(), 0);
        assert!(s.poll(now + Duration::from_millis(220)));
        assert_eq!(s.position(), 1);
        assert!(!s.poll(now + Duration::from_secs(5)));
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn test_stale_fly_out_after_reset_is_ignored() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        let token = s.commit_swipe(Direction::Right).unwrap();
        s.reset();
        assert!(!s.complete_fly_out(token));
        assert_eq!(s.position(), 0);
        assert_eq!(s.phase(), Phase::Active);
        assert!(s.liked().is_empty());
    }

    #[test]
    fn test_token_cannot_complete_twice() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);
        let token = s.commit_swipe(Direction::Right).unwrap();
        assert!(s.complete_fly_out(token));
        assert!(!s.complete_fly_out(token));
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn test_drag_below_threshold_snaps_back() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        s.begin_drag(100);
        assert!(s.update_drag(160));
        assert_eq!(s.drag_offset(), 60);
        assert!(s.end_drag(170).is_none());

        assert_eq!(s.drag_offset(), 0);
        assert!(!s.is_dragging());
        assert_eq!(s.phase(), Phase::Active);
        assert!(s.liked().is_empty());
        assert!(s.disliked().is_empty());
        assert!(!s.can_undo());
    }

    #[test]
    fn test_drag_exactly_threshold_snaps_back() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a"]);
        s.begin_drag(0);
        assert!(s.end_drag(-70).is_none());
        assert_eq!(s.position(), 0);
        assert!(s.disliked().is_empty());
    }

    #[test]
    fn test_drag_past_threshold_commits() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        s.begin_drag(10);
        s.update_drag(90);
        let token = s.end_drag(90).unwrap();
        assert_eq!(token.direction, Direction::Right);
        assert!(!s.is_dragging());
        s.complete_fly_out(token);
        assert_eq!(s.liked(), &[Item::new("a")]);
        assert_eq!(s.drag_offset(), 0);

        s.begin_drag(200);
        let token = s.end_drag(100).unwrap();
        assert_eq!(token.direction, Direction::Left);
        s.complete_fly_out(token);
        assert_eq!(s.disliked(), &[Item::new("b")]);
        assert!(s.is_done());
    }

    #[test]
    fn test_begin_drag_ignored_when_dragging_or_animating() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        s.begin_drag(10);
        s.begin_drag(50);
        s.update_drag(20);
        assert_eq!(s.drag_offset(), 10);
        s.cancel_drag();

        s.commit_swipe(Direction::Right);
        s.begin_drag(0);
        assert!(!s.is_dragging());
        assert!(!s.update_drag(100));
        assert!(s.end_drag(100).is_none());
    }

    #[test]
    fn test_update_without_drag_is_noop() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a"]);
        assert!(!s.update_drag(30));
        assert_eq!(s.drag_offset(), 0);
        assert!(s.end_drag(300).is_none());
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn test_drag_progress() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a"]);
        s.begin_drag(0);
        s.update_drag(35);
        assert!((s.drag_progress() - 0.5).abs() < f64::EPSILON);
        s.update_drag(-500);
        assert!((s.drag_progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extreme_drag_coordinates_saturate() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);

        s.begin_drag(i32::MIN);
        assert!(s.update_drag(i32::MAX));
        assert_eq!(s.drag_offset(), i32::MAX);
        let token = s.end_drag(i32::MAX).unwrap();
        assert_eq!(token.direction, Direction::Right);
        s.complete_fly_out(token);

        s.begin_drag(i32::MAX);
        assert!(s.update_drag(i32::MIN));
        assert_eq!(s.drag_offset(), i32::MIN);
        assert!((s.drag_progress() - 1.0).abs() < f64::EPSILON);
        let token = s.end_drag(i32::MIN).unwrap();
        assert_eq!(token.direction, Direction::Left);
    }

    #[test]
    fn test_undo_is_single_use() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);
        swipe(&mut s, Direction::Right);
        swipe(&mut s, Direction::Left);

        assert!(s.undo());
        assert_eq!(s.position(), 1);
        assert_eq!(s.liked(), &[Item::new("a")]);
        assert!(s.disliked().is_empty());
        assert!(!s.can_undo());

        assert!(!s.undo());
        assert_eq!(s.position(), 1);
        assert_eq!(s.liked(), &[Item::new("a")]);
        assert_invariants(&s);
    }

    #[test]
    fn test_undo_with_empty_slot_is_noop() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);
        assert!(!s.undo());
        assert_eq!(s.position(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn test_undo_blocked_while_animating() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);
        swipe(&mut s, Direction::Right);
        let token = s.commit_swipe(Direction::Right).unwrap();
        assert!(!s.undo());
        assert_eq!(s.liked().len(), 2);
        s.complete_fly_out(token);
        assert!(s.undo());
        assert_eq!(s.liked(), &[Item::new("a")]);
    }

    #[test]
    fn test_undo_from_done_reactivates() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a"]);
        swipe(&mut s, Direction::Right);
        assert!(s.is_done());
        assert!(s.undo());
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.current_item(), Some(&Item::new("a")));
        assert!(s.liked().is_empty());
    }

    #[test]
    fn test_reset_keeps_deck() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);
        swipe(&mut s, Direction::Right);
        swipe(&mut s, Direction::Left);
        assert!(s.is_done());

        s.reset();
        assert_eq!(s.position(), 0);
        assert!(s.liked().is_empty());
        assert!(s.disliked().is_empty());
        assert!(!s.can_undo());
        assert_eq!(s.items(), deck(&["a", "b"]).as_slice());
        assert_eq!(s.phase(), Phase::Active);
    }

    #[test]
    fn test_full_scenario() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["A", "B", "C"]);

        swipe(&mut s, Direction::Right);
        assert_eq!(s.liked(), &[Item::new("A")]);
        assert_eq!(s.position(), 1);
        assert!(s.can_undo());

        swipe(&mut s, Direction::Left);
        assert_eq!(s.disliked(), &[Item::new("B")]);
        assert_eq!(s.position(), 2);
        assert!(s.can_undo());

        assert!(s.undo());
        assert!(s.disliked().is_empty());
        assert_eq!(s.position(), 1);
        assert!(!s.can_undo());

        swipe(&mut s, Direction::Right);
        assert_eq!(s.liked(), &[Item::new("A"), Item::new("B")]);
        assert_eq!(s.position(), 2);

        swipe(&mut s, Direction::Left);
        assert_eq!(s.disliked(), &[Item::new("C")]);
        assert_eq!(s.position(), 3);
        assert!(s.is_done());
        assert_invariants(&s);
    }

    #[test]
    fn test_status_of() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);
        swipe(&mut s, Direction::Right);
        assert_eq!(s.status_of(0), ItemStatus::Seen);
        assert_eq!(s.status_of(1), ItemStatus::Current);
        assert_eq!(s.status_of(2), ItemStatus::Upcoming);
    }

    #[test]
    fn test_progress_is_persisted() {
        let store = MemoryStore::new();
        {
            let mut s = session(&store, &["a", "b", "c"]);
            swipe(&mut s, Direction::Right);
            swipe(&mut s, Direction::Left);
        }
        assert_eq!(store.raw(ProgressKey::Position).as_deref(), Some("2"));
        assert_eq!(store.raw(ProgressKey::Liked).as_deref(), Some(r#"["a"]"#));
        assert_eq!(store.raw(ProgressKey::Disliked).as_deref(), Some(r#"["b"]"#));

        let restored = session(&store, &["a", "b", "c"]);
        assert_eq!(restored.position(), 2);
        assert_eq!(restored.current_item(), Some(&Item::new("c")));
        assert!(!restored.can_undo());
    }

    #[test]
    fn test_restore_done_session() {
        let store = MemoryStore::with_values(&[
            (ProgressKey::Position, "2"),
            (ProgressKey::Liked, r#"["a","b"]"#),
        ]);
        let s = session(&store, &["a", "b"]);
        assert!(s.is_done());
    }

    #[test]
    fn test_restore_mismatched_progress_starts_fresh() {
        let store = MemoryStore::with_values(&[
            (ProgressKey::Position, "9"),
            (ProgressKey::Liked, r#"["a"]"#),
        ]);
        let s = session(&store, &["a", "b"]);
        assert_eq!(s.position(), 0);
        assert!(s.liked().is_empty());
    }

    #[test]
    fn test_restore_counts_uncompleted_swipe() {
        let store = MemoryStore::new();
        {
            let mut s = session(&store, &["a", "b", "c"]);
            swipe(&mut s, Direction::Right);
            let _ = s.commit_swipe(Direction::Left);
        }
        assert_eq!(store.raw(ProgressKey::Position).as_deref(), Some("1"));

        let restored = session(&store, &["a", "b", "c"]);
        assert_eq!(restored.position(), 2);
        assert_eq!(restored.liked(), &[Item::new("a")]);
        assert_eq!(restored.disliked(), &[Item::new("b")]);
        assert_eq!(store.raw(ProgressKey::Position).as_deref(), Some("2"));
    }

    #[test]
    fn test_finish_fly_out_ignores_due_time() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);
        assert!(!s.finish_fly_out());

        let now = Instant::now();
        s.commit_swipe_at(Direction::Right, now + Duration::from_secs(60));
        assert!(s.finish_fly_out());
        assert_eq!(s.position(), 1);
        assert_eq!(s.phase(), Phase::Active);
        assert!(s.pending_fly_out().is_none());
        assert_eq!(store.raw(ProgressKey::Position).as_deref(), Some("1"));
    }

    #[test]
    fn test_restore_malformed_sequence() {
        let store = MemoryStore::with_values(&[(ProgressKey::Liked, "not json")]);
        let s = session(&store, &["a"]);
        assert_eq!(s.position(), 0);
        assert!(s.liked().is_empty());
    }

    #[test]
    fn test_reset_persists_cleared_state() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b"]);
        swipe(&mut s, Direction::Right);
        s.reset();
        drop(s);
        assert_eq!(store.raw(ProgressKey::Position).as_deref(), Some("0"));
        assert_eq!(store.raw(ProgressKey::Liked).as_deref(), Some("[]"));
    }

    #[test]
    fn test_feedback_pulses() {
        let store = MemoryStore::new();
        let feedback = RecordingFeedback::default();
        let mut s = session(&store, &["a", "b", "c"]).with_feedback(feedback.clone());

        swipe(&mut s, Direction::Right);
        swipe(&mut s, Direction::Left);
        let _ = s.commit_swipe(Direction::Left);
        let _ = s.commit_swipe(Direction::Left);

        assert_eq!(feedback.pulses(), vec![Pulse::Like, Pulse::Dislike, Pulse::Dislike]);
    }

    #[test]
    fn test_undo_removes_by_value() {
        let store = MemoryStore::new();
        let mut s = session(&store, &["a", "b", "c"]);
        swipe(&mut s, Direction::Right);
        swipe(&mut s, Direction::Right);
        assert!(s.undo());
        assert_eq!(s.liked(), &[Item::new("a")]);
        assert_eq!(s.current_item(), Some(&Item::new("b")));
    }
}
