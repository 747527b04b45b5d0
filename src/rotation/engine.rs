//! Cyclic index engine with timed auto-advance.
//!
//! # State Machine
//!
//! The engine owns a [`RotationState`] plus the two resources that drive it:
//!
//! - an optional auto-advance timer, present exactly while the engine is
//!   mounted, rotatable (`item_count > items_per_view`) and not paused;
//! - an optional transition deadline, present while a navigation is settling.
//!
//! Navigation requests that arrive while a transition is settling are dropped,
//! not queued. Timer ticks go through the same path, so a tick that lands
//! during a manual transition is dropped as well.
//!
//! The timer is re-registered (fresh [`TimerToken`]) whenever one of its
//! dependencies changes: effective pause state, item count or items per view.
//! Callbacks carrying an older token are ignored.

use super::timer::{AutoAdvanceTimer, TimerToken};
use super::viewport::ViewPolicy;
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Default transition settle delay for carousels.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

/// Shortest interval a timer may be armed with.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// How the index maps onto the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// One item at a time; the index is the item.
    SingleItem,
    /// A window of `items_per_view` items slides one item per step.
    SlidingWindow,
}

/// Static parameters of one rotating surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Index-to-collection mapping.
    pub mode: RotationMode,
    /// Items-per-view policy. Ignored in [`RotationMode::SingleItem`].
    pub view: ViewPolicy,
    /// Auto-advance interval.
    pub interval: Duration,
    /// Transition settle delay. Zero disables the transition lock.
    pub settle: Duration,
}

impl RotationConfig {
    /// Single-item carousel: 5 s interval, 500 ms settle.
    pub fn single_item() -> Self {
        Self {
            mode: RotationMode::SingleItem,
            view: ViewPolicy::Fixed(1),
            interval: DEFAULT_INTERVAL,
            settle: DEFAULT_SETTLE,
        }
    }

    /// Sliding-window carousel with the given view policy.
    pub fn sliding_window(view: ViewPolicy) -> Self {
        Self {
            mode: RotationMode::SlidingWindow,
            view,
            interval: DEFAULT_INTERVAL,
            settle: DEFAULT_SETTLE,
        }
    }

    /// Override the auto-advance interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    /// Override the settle delay.
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    fn items_per_view(&self, viewport_width: u32) -> usize {
        match self.mode {
            RotationMode::SingleItem => 1,
            RotationMode::SlidingWindow => self.view.items_per_view(viewport_width),
        }
    }
}

/// Observable rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    /// First visible item (window start, or the single item shown).
    pub current_index: usize,
    /// Items visible at once. Always at least 1.
    pub items_per_view: usize,
    /// Paused by the user or by pointer hover.
    pub is_paused: bool,
    /// A navigation is still settling.
    pub is_transitioning: bool,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The index changed.
    Moved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
    /// The request was dropped; state is unchanged.
    Refused(Refusal),
}

impl Navigation {
    /// Whether the index changed.
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// `item_count <= items_per_view`.
    NothingToRotate,
    /// Another transition is still settling.
    Transitioning,
    /// Jump target is not a valid page.
    OutOfBounds,
    /// Jump target is the page already shown.
    AlreadyShown,
    /// The engine was unmounted.
    Unmounted,
}

/// Timer-driven cyclic index over a fixed-size collection.
#[derive(Debug)]
pub struct RotationEngine {
    config: RotationConfig,
    item_count: usize,
    items_per_view: usize,
    current_index: usize,
    user_paused: bool,
    hovered: bool,
    transition_until: Option<Instant>,
    timer: Option<AutoAdvanceTimer>,
    last_token: u64,
    registrations: usize,
    mounted: bool,
}

impl RotationEngine {
    /// Mount an engine over `item_count` items.
    ///
    /// Starts at index 0 and registers the auto-advance timer if there is
    /// anything to rotate. An empty collection registers nothing.
    pub fn mount(
        config: RotationConfig,
        item_count: usize,
        viewport_width: u32,
        now: Instant,
    ) -> Self {
        Self::mount_with(config, item_count, viewport_width, false, now)
    }

    /// Mount already paused by the user. No timer is registered until
    /// [`set_paused(false)`](Self::set_paused).
    pub fn mount_paused(
        config: RotationConfig,
        item_count: usize,
        viewport_width: u32,
        now: Instant,
    ) -> Self {
        Self::mount_with(config, item_count, viewport_width, true, now)
    }

    fn mount_with(
        config: RotationConfig,
        item_count: usize,
        viewport_width: u32,
        user_paused: bool,
        now: Instant,
    ) -> Self {
        let mut engine = Self {
            config,
            item_count,
            items_per_view: config.items_per_view(viewport_width),
            current_index: 0,
            user_paused,
            hovered: false,
            transition_until: None,
            timer: None,
            last_token: 0,
            registrations: 0,
            mounted: true,
        };
        engine.reschedule(now);
        engine
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> RotationState {
        RotationState {
            current_index: self.current_index,
            items_per_view: self.items_per_view,
            is_paused: self.is_paused(),
            is_transitioning: self.is_transitioning(),
        }
    }

    /// Configuration the engine was mounted with.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Number of items in the backing collection.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Items visible at once.
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Number of distinct indices: `max(1, item_count - items_per_view + 1)`.
    ///
    /// With one item per view this is `max(1, item_count)`, which covers the
    /// single-item mode.
    pub fn page_count(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view) + 1
    }

    /// Whether there is anything to rotate.
    pub fn is_rotatable(&self) -> bool {
        self.item_count > self.items_per_view
    }

    /// Paused by the user or by hover.
    pub fn is_paused(&self) -> bool {
        self.user_paused || self.hovered
    }

    /// Paused explicitly by the user (ignores hover).
    pub fn is_user_paused(&self) -> bool {
        self.user_paused
    }

    /// Whether the pointer is over the surface.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a navigation is still settling.
    pub fn is_transitioning(&self) -> bool {
        self.transition_until.is_some()
    }

    /// Whether the engine is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Indices of the items currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_index.min(self.item_count);
        let end = (start + self.items_per_view).min(self.item_count);
        start..end
    }

    /// Token of the live auto-advance timer, if one is registered.
    pub fn active_timer(&self) -> Option<TimerToken> {
        self.timer.as_ref().map(AutoAdvanceTimer::token)
    }

    /// How many timers this engine has registered over its lifetime.
    pub fn timer_registrations(&self) -> usize {
        self.registrations
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let timer = self.timer.as_ref().map(AutoAdvanceTimer::deadline);
        match (timer, self.transition_until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Move forward one step, wrapping at the end.
    pub fn advance(&mut self, now: Instant) -> Navigation {
        if let Some(refusal) = self.step_blocker(now) {
            return self.refuse(refusal);
        }
        let pages = self.page_count();
        self.move_to((self.current_index + 1) % pages, now)
    }

    /// Move back one step, wrapping from 0 to the last page.
    pub fn retreat(&mut self, now: Instant) -> Navigation {
        if let Some(refusal) = self.step_blocker(now) {
            return self.refuse(refusal);
        }
        let pages = self.page_count();
        self.move_to((self.current_index + pages - 1) % pages, now)
    }

    /// Jump straight to `index`.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Navigation {
        if !self.mounted {
            return self.refuse(Refusal::Unmounted);
        }
        self.settle(now);
        if self.is_transitioning() {
            return self.refuse(Refusal::Transitioning);
        }
        if index >= self.page_count() {
            return self.refuse(Refusal::OutOfBounds);
        }
        if index == self.current_index {
            return Navigation::Refused(Refusal::AlreadyShown);
        }
        self.move_to(index, now)
    }

    /// Suspend or resume auto-advance. The index is kept.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.user_paused == paused {
            return;
        }
        let was_paused = self.is_paused();
        self.user_paused = paused;
        if was_paused != self.is_paused() {
            self.reschedule(now);
        }
    }

    /// Record whether the pointer is over the surface.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        let was_paused = self.is_paused();
        self.hovered = hovered;
        if was_paused != self.is_paused() {
            self.reschedule(now);
        }
    }

    /// Re-evaluate items per view after a viewport change.
    ///
    /// Always resets the index to 0 so the window can never start past the
    /// last valid page.
    pub fn recompute_items_per_view(&mut self, viewport_width: u32, now: Instant) {
        if !self.mounted {
            return;
        }
        let items_per_view = self.config.items_per_view(viewport_width);
        self.current_index = 0;
        if items_per_view != self.items_per_view {
            debug!(
                from = self.items_per_view,
                to = items_per_view,
                "Items per view changed"
            );
            self.items_per_view = items_per_view;
            self.reschedule(now);
        }
    }

    /// Drive time forward: settle an expired transition and fire the timer
    /// if it is due.
    ///
    /// Returns the outcome of the auto-advance if the timer fired.
    pub fn tick(&mut self, now: Instant) -> Option<Navigation> {
        if !self.mounted {
            return None;
        }
        self.settle(now);
        let token = match &self.timer {
            Some(timer) if timer.is_due(now) => timer.token(),
            _ => return None,
        };
        self.fire(token, now)
    }

    /// Timer callback.
    ///
    /// Ignored (returns `None`) when the engine is unmounted or `token` is
    /// not the live registration.
    pub fn fire(&mut self, token: TimerToken, now: Instant) -> Option<Navigation> {
        let live = self.mounted && self.active_timer() == Some(token);
        if !live {
            debug!(%token, "Ignoring stale timer callback");
            return None;
        }
        let outcome = self.advance(now);
        if let Some(timer) = self.timer.as_mut() {
            timer.rearm(now);
        }
        trace!(%token, ?outcome, "Auto-advance tick");
        Some(outcome)
    }

    /// Release the timer and stop accepting navigation.
    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!(token = %timer.token(), "Auto-advance timer released on unmount");
        }
        self.transition_until = None;
        self.mounted = false;
    }

    fn step_blocker(&mut self, now: Instant) -> Option<Refusal> {
        if !self.mounted {
            return Some(Refusal::Unmounted);
        }
        self.settle(now);
        if !self.is_rotatable() {
            Some(Refusal::NothingToRotate)
        } else if self.is_transitioning() {
            Some(Refusal::Transitioning)
        } else {
            None
        }
    }

    fn refuse(&self, refusal: Refusal) -> Navigation {
        if refusal == Refusal::Transitioning {
            debug!(index = self.current_index, "Navigation dropped during transition");
        }
        Navigation::Refused(refusal)
    }

    fn move_to(&mut self, to: usize, now: Instant) -> Navigation {
        let from = self.current_index;
        self.current_index = to;
        if !self.config.settle.is_zero() {
            self.transition_until = Some(now + self.config.settle);
        }
        Navigation::Moved { from, to }
    }

    fn settle(&mut self, now: Instant) {
        if matches!(self.transition_until, Some(until) if now >= until) {
            self.transition_until = None;
        }
    }

    /// Tear down the current timer and register a fresh one if the engine
    /// is active, unpaused and rotatable.
    fn reschedule(&mut self, now: Instant) {
        let released = self.timer.take().map(|timer| timer.token());
        if self.mounted && self.is_rotatable() && !self.is_paused() {
            self.last_token += 1;
            let token = TimerToken::new(self.last_token);
            self.timer = Some(AutoAdvanceTimer::arm(token, self.config.interval, now));
            self.registrations += 1;
            debug!(%token, replaced = ?released, "Auto-advance timer registered");
        } else if let Some(token) = released {
            debug!(%token, "Auto-advance timer released");
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
