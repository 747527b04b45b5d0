//! Board state and transitions.
//!
//! AppState is the root state type: the selected institution, the four
//! rotating surfaces, which one has focus, and the overlays and screens
//! stacked on top of the board. Nothing here touches the terminal; time
//! arrives as an `Instant` argument.
//!
//! # Screens
//!
//! - **Board**: the four surfaces.
//! - **Article**: one news article, opened from the news carousel.
//! - **NotFound**: unknown institution code or article id.
//!
//! The admissions form and the help overlay sit above whichever screen is
//! showing; `Esc` closes the topmost layer first.

use super::form_editor::FormEditor;
use super::surface::{marquee_strip, Surface, SurfaceControl};
use crate::config::SurfaceConfigs;
use crate::model::{
    CarouselSlide, InstitutionCode, InstitutionProfile, InstitutionRegistry, ItemKey,
    NewsArticle, QuickUpdate,
};
use crate::rotation::viewport_width;
use crate::source::ContentBundle;
use crate::submission::SubmissionResult;
use std::time::Instant;
use tracing::{debug, info};

// ===== Focus =====

/// Which surface receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusedSurface {
    /// Image gallery.
    Images,
    /// News carousel.
    News,
    /// Quick-updates ticker.
    Updates,
    /// Scrolling announcement strip.
    Marquee,
}

impl FocusedSurface {
    /// Every surface, in focus-cycle order.
    pub const ALL: [FocusedSurface; 4] = [
        FocusedSurface::Images,
        FocusedSurface::News,
        FocusedSurface::Updates,
        FocusedSurface::Marquee,
    ];

    /// Next surface in the cycle, wrapping.
    pub fn next(self) -> Self {
        match self {
            FocusedSurface::Images => FocusedSurface::News,
            FocusedSurface::News => FocusedSurface::Updates,
            FocusedSurface::Updates => FocusedSurface::Marquee,
            FocusedSurface::Marquee => FocusedSurface::Images,
        }
    }

    /// Title shown on the surface's border.
    pub fn title(self) -> &'static str {
        match self {
            FocusedSurface::Images => "Gallery",
            FocusedSurface::News => "News",
            FocusedSurface::Updates => "Quick Updates",
            FocusedSurface::Marquee => "Announcements",
        }
    }
}

// ===== Screens =====

/// What could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    /// Unknown institution code.
    Institution(String),
    /// Unknown article id for the current institution.
    Article(String),
}

/// Top-level screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The rotating surfaces.
    Board,
    /// Detail view of one news article.
    Article(ItemKey),
    /// Unknown institution or article.
    NotFound(Missing),
}

/// One-line message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text.
    pub text: String,
    /// Styles the message as success or failure.
    pub success: bool,
}

impl From<SubmissionResult> for StatusMessage {
    fn from(result: SubmissionResult) -> Self {
        Self {
            text: result.message,
            success: result.success,
        }
    }
}

// ===== AppState =====

/// Board state. Owns every surface and therefore every live timer.
#[derive(Debug)]
pub struct AppState {
    registry: InstitutionRegistry,
    institution: Option<InstitutionCode>,

    /// Single-image carousel.
    pub images: Surface<CarouselSlide>,
    /// Responsive news carousel.
    pub news: Surface<NewsArticle>,
    /// Vertical quick-updates ticker.
    pub updates: Surface<QuickUpdate>,
    /// Marquee; items are the strip's characters.
    pub marquee: Surface<char>,

    /// Surface receiving navigation keys.
    pub focus: FocusedSurface,
    hovered: Option<FocusedSurface>,

    /// Current screen.
    pub screen: Screen,
    /// Admissions form overlay, when open.
    pub form: Option<FormEditor>,
    /// Whether the help overlay is showing.
    pub help_visible: bool,
    /// Latest status bar message.
    pub status: Option<StatusMessage>,

    start_paused: bool,
    cell_width: u16,
    columns: u16,
    pending_article: Option<String>,
}

impl AppState {
    /// Board for `requested` (or the registry's first institution).
    ///
    /// An unknown code starts on the not-found screen with no institution
    /// selected.
    pub fn new(
        registry: InstitutionRegistry,
        surfaces: SurfaceConfigs,
        requested: Option<&str>,
        start_paused: bool,
        cell_width: u16,
    ) -> Self {
        let (institution, screen) = match requested {
            None => (Some(registry.first().code.clone()), Screen::Board),
            Some(code) => match registry.get(code) {
                Some(profile) => (Some(profile.code.clone()), Screen::Board),
                None => (None, Screen::NotFound(Missing::Institution(code.to_string()))),
            },
        };

        Self {
            registry,
            institution,
            images: Surface::new(surfaces.images),
            news: Surface::new(surfaces.news),
            updates: Surface::new(surfaces.updates),
            marquee: Surface::new(surfaces.marquee),
            focus: FocusedSurface::Images,
            hovered: None,
            screen,
            form: None,
            help_visible: false,
            status: None,
            start_paused,
            cell_width: cell_width.max(1),
            columns: 0,
            pending_article: None,
        }
    }

    // ===== Accessors =====

    /// Institution registry.
    pub fn registry(&self) -> &InstitutionRegistry {
        &self.registry
    }

    /// Selected institution, `None` on the unknown-institution screen.
    pub fn institution(&self) -> Option<&InstitutionCode> {
        self.institution.as_ref()
    }

    /// Profile of the selected institution.
    pub fn profile(&self) -> Option<&InstitutionProfile> {
        self.institution
            .as_ref()
            .and_then(|code| self.registry.get(code.as_str()))
    }

    /// Surface under the pointer.
    pub fn hovered(&self) -> Option<FocusedSurface> {
        self.hovered
    }

    /// Viewport width (in breakpoint units) of the last known terminal size.
    pub fn viewport_width(&self) -> u32 {
        viewport_width(self.columns, self.cell_width)
    }

    /// Surface by name, type-erased.
    pub fn surface(&self, which: FocusedSurface) -> &dyn SurfaceControl {
        match which {
            FocusedSurface::Images => &self.images,
            FocusedSurface::News => &self.news,
            FocusedSurface::Updates => &self.updates,
            FocusedSurface::Marquee => &self.marquee,
        }
    }

    /// Mutable surface by name, type-erased.
    pub fn surface_mut(&mut self, which: FocusedSurface) -> &mut dyn SurfaceControl {
        match which {
            FocusedSurface::Images => &mut self.images,
            FocusedSurface::News => &mut self.news,
            FocusedSurface::Updates => &mut self.updates,
            FocusedSurface::Marquee => &mut self.marquee,
        }
    }

    /// Article shown on the article screen.
    pub fn current_article(&self) -> Option<&NewsArticle> {
        match &self.screen {
            Screen::Article(key) => self.news.find(key.as_str()),
            _ => None,
        }
    }

    /// Marquee strip characters, in order.
    pub fn marquee_chars(&self) -> &[char] {
        self.marquee.items()
    }

    // ===== Content lifecycle =====

    /// Open `id` once the current institution's news has loaded.
    pub fn request_article(&mut self, id: impl Into<String>) {
        self.pending_article = Some(id.into());
    }

    /// Mount fresh engines over a loaded bundle.
    ///
    /// Returns false (and changes nothing) if the bundle belongs to an
    /// institution that is no longer selected.
    pub fn apply_content(&mut self, bundle: ContentBundle, now: Instant) -> bool {
        if self.institution.as_ref() != Some(&bundle.institution) {
            debug!(
                institution = %bundle.institution,
                "ignoring content for unselected institution"
            );
            return false;
        }

        let width = self.viewport_width();
        let paused = self.start_paused;
        let strip: Vec<char> = marquee_strip(&bundle.updates).chars().collect();

        self.images.populate(bundle.slides, width, paused, now);
        self.news.populate(bundle.news, width, paused, now);
        self.updates.populate(bundle.updates, width, paused, now);
        self.marquee.populate(strip, width, paused, now);

        // Hover survives a reload as long as the pointer has not moved.
        if let Some(which) = self.hovered {
            self.surface_mut(which).set_hovered(true, now);
        }

        if let Some(id) = self.pending_article.take() {
            self.screen = match self.news.find(&id) {
                Some(article) => Screen::Article(article.id.clone()),
                None => Screen::NotFound(Missing::Article(id)),
            };
        } else {
            let vanished = match &self.screen {
                Screen::Article(key) if self.news.find(key.as_str()).is_none() => {
                    Some(key.to_string())
                }
                _ => None,
            };
            if let Some(id) = vanished {
                self.screen = Screen::NotFound(Missing::Article(id));
            }
        }

        info!(
            institution = %bundle.institution,
            slides = self.images.items().len(),
            news = self.news.items().len(),
            updates = self.updates.items().len(),
            "content applied"
        );
        true
    }

    /// Unmount every surface and wait for new content.
    pub fn unmount_all(&mut self) {
        self.images.reset();
        self.news.reset();
        self.updates.reset();
        self.marquee.reset();
    }

    /// Reload the selected institution. Returns the code to fetch.
    pub fn reload(&mut self) -> Option<InstitutionCode> {
        let code = self.institution.clone()?;
        self.unmount_all();
        Some(code)
    }

    /// Switch to the next (`forward`) or previous institution.
    ///
    /// Unmounts all surfaces and returns the code to fetch.
    pub fn switch_institution(&mut self, forward: bool) -> InstitutionCode {
        let current = self
            .institution
            .as_ref()
            .map(InstitutionCode::as_str)
            .unwrap_or_default();
        let code = self.registry.neighbour(current, forward).code.clone();
        info!(from = current, to = %code, "switching institution");

        self.unmount_all();
        self.institution = Some(code.clone());
        self.screen = Screen::Board;
        self.form = None;
        self.pending_article = None;
        self.status = None;
        code
    }

    // ===== Time and viewport =====

    /// Drive every surface forward. True if anything moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut moved = false;
        for which in FocusedSurface::ALL {
            moved |= self.surface_mut(which).tick(now);
        }
        moved
    }

    /// Earliest instant any surface needs a tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        FocusedSurface::ALL
            .into_iter()
            .filter_map(|which| self.surface(which).next_deadline())
            .min()
    }

    /// Terminal resized to `columns`.
    ///
    /// Only the news carousel is responsive; the other surfaces keep their
    /// fixed view and index.
    pub fn resize(&mut self, columns: u16, now: Instant) {
        if columns == self.columns {
            return;
        }
        self.columns = columns;
        let width = self.viewport_width();
        self.news.resize(width, now);
    }

    /// Pointer moved onto `surface` (or off every surface).
    pub fn set_hover(&mut self, surface: Option<FocusedSurface>, now: Instant) {
        if surface == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.surface_mut(previous).set_hovered(false, now);
        }
        if let Some(next) = surface {
            self.surface_mut(next).set_hovered(true, now);
        }
        self.hovered = surface;
    }

    // ===== Screens and overlays =====

    /// Tab.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Open the first article in the news window.
    pub fn open_article(&mut self) {
        if self.screen != Screen::Board {
            return;
        }
        if let Some(article) = self.news.current() {
            self.screen = Screen::Article(article.id.clone());
        }
    }

    /// Close the topmost layer.
    pub fn back(&mut self) {
        if self.form.is_some() {
            self.form = None;
        } else if self.help_visible {
            self.help_visible = false;
        } else if self.screen != Screen::Board && self.institution.is_some() {
            self.screen = Screen::Board;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Open an empty admissions form. Needs a selected institution.
    pub fn open_form(&mut self) {
        if self.institution.is_some() && self.form.is_none() {
            self.form = Some(FormEditor::new());
        }
    }

    /// Record a submission outcome. Success closes the form; failure keeps
    /// it open with the message shown inside.
    pub fn finish_submission(&mut self, result: SubmissionResult) {
        if result.success {
            self.form = None;
        } else if let Some(editor) = self.form.as_mut() {
            editor.notice = Some(result.message.clone());
        }
        self.status = Some(result.into());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
