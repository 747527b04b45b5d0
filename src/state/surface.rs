//! Rotating surfaces: content plus the engine that rotates it.
//!
//! A [`Surface`] starts in [`LoadState::Loading`] with no engine. When its
//! collection arrives it mounts a fresh [`RotationEngine`] sized to the
//! collection; reloading unmounts the previous engine first, so at most one
//! timer per surface is ever live.

use crate::model::{QuickUpdate, Rotatable};
use crate::rotation::{Navigation, RotationConfig, RotationEngine};
use std::time::Instant;

/// Content availability of a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Fetch in flight; render a placeholder.
    Loading,
    /// Collection available (possibly empty).
    Loaded(Vec<T>),
}

/// One mounted rotation UI.
#[derive(Debug)]
pub struct Surface<T> {
    config: RotationConfig,
    content: LoadState<T>,
    engine: Option<RotationEngine>,
}

impl<T> Surface<T> {
    /// Unmounted surface waiting for content.
    pub fn new(config: RotationConfig) -> Self {
        Self {
            config,
            content: LoadState::Loading,
            engine: None,
        }
    }

    /// Replace the content and mount a new engine over it.
    pub fn populate(&mut self, items: Vec<T>, viewport_width: u32, paused: bool, now: Instant) {
        self.unmount();
        let count = items.len();
        self.engine = Some(if paused {
            RotationEngine::mount_paused(self.config, count, viewport_width, now)
        } else {
            RotationEngine::mount(self.config, count, viewport_width, now)
        });
        self.content = LoadState::Loaded(items);
    }

    /// Unmount the engine and go back to [`LoadState::Loading`].
    pub fn reset(&mut self) {
        self.unmount();
        self.content = LoadState::Loading;
    }

    fn unmount(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.unmount();
        }
    }

    /// Rotation parameters.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Whether content is still being fetched.
    pub fn is_loading(&self) -> bool {
        matches!(self.content, LoadState::Loading)
    }

    /// Loaded items; empty while loading.
    pub fn items(&self) -> &[T] {
        match &self.content {
            LoadState::Loading => &[],
            LoadState::Loaded(items) => items,
        }
    }

    /// Items currently in view.
    pub fn visible(&self) -> &[T] {
        match &self.engine {
            Some(engine) => &self.items()[engine.visible_range()],
            None => &[],
        }
    }

    /// First item in view.
    pub fn current(&self) -> Option<&T> {
        self.visible().first()
    }
}

/// Type-erased rotation controls, so the board can address a surface by
/// focus without knowing its item type.
pub trait SurfaceControl {
    /// Mounted engine, if content has arrived.
    fn engine(&self) -> Option<&RotationEngine>;

    /// Mutable engine access.
    fn engine_mut(&mut self) -> Option<&mut RotationEngine>;

    /// Manual next.
    fn advance(&mut self, now: Instant) -> Option<Navigation> {
        self.engine_mut().map(|e| e.advance(now))
    }

    /// Manual previous.
    fn retreat(&mut self, now: Instant) -> Option<Navigation> {
        self.engine_mut().map(|e| e.retreat(now))
    }

    /// Page indicator click.
    fn jump_to(&mut self, index: usize, now: Instant) -> Option<Navigation> {
        self.engine_mut().map(|e| e.jump_to(index, now))
    }

    /// Flip the user pause.
    fn toggle_pause(&mut self, now: Instant) {
        if let Some(engine) = self.engine_mut() {
            let paused = engine.is_user_paused();
            engine.set_paused(!paused, now);
        }
    }

    /// Pointer entered or left the surface.
    fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if let Some(engine) = self.engine_mut() {
            engine.set_hovered(hovered, now);
        }
    }

    /// Viewport changed.
    fn resize(&mut self, viewport_width: u32, now: Instant) {
        if let Some(engine) = self.engine_mut() {
            engine.recompute_items_per_view(viewport_width, now);
        }
    }

    /// Drive time forward. True if the index moved.
    fn tick(&mut self, now: Instant) -> bool {
        self.engine_mut()
            .and_then(|e| e.tick(now))
            .is_some_and(|nav| nav.moved())
    }

    /// Earliest instant this surface needs a tick.
    fn next_deadline(&self) -> Option<Instant> {
        self.engine().and_then(RotationEngine::next_deadline)
    }
}

impl<T> SurfaceControl for Surface<T> {
    fn engine(&self) -> Option<&RotationEngine> {
        self.engine.as_ref()
    }

    fn engine_mut(&mut self) -> Option<&mut RotationEngine> {
        self.engine.as_mut()
    }
}

impl<T: Rotatable> Surface<T> {
    /// Find a loaded item by key.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.items().iter().find(|item| item.key().as_str() == key)
    }
}

impl<T> Drop for Surface<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ===== Marquee =====

/// Gap between consecutive updates on the marquee strip.
pub const MARQUEE_SEPARATOR: &str = "   •   ";

/// Build the marquee strip text from the quick updates.
///
/// Each update contributes `"<glyph> <LABEL>: <title>"`, followed by the
/// separator so the strip joins up with itself when it wraps.
pub fn marquee_strip(updates: &[QuickUpdate]) -> String {
    let mut strip = String::new();
    for update in updates {
        strip.push_str(update.icon().glyph());
        strip.push(' ');
        strip.push_str(update.kind.label());
        strip.push_str(": ");
        strip.push_str(&update.title);
        strip.push_str(MARQUEE_SEPARATOR);
    }
    strip
}
