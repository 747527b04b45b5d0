//! Board layout rendering.
//!
//! Pure layout logic: splits the frame into the header, the four surfaces
//! and the status bar, then hands each area to its renderer. The same
//! [`BoardAreas`] drive mouse hit-testing in the event loop.

use super::constants::{
    GALLERY_WIDTH_PERCENT, HEADER_HEIGHT, MARQUEE_HEIGHT, PAUSED_BADGE, STATUS_BAR_HEIGHT,
    TICKER_HEIGHT,
};
use super::styles::BoardStyles;
use super::{article, carousel, form, help, marquee, ticker};
use crate::rotation::RotationEngine;
use crate::state::{AppState, FocusedSurface, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardAreas {
    /// Institution header.
    pub header: Rect,
    /// Everything between header and status bar.
    pub body: Rect,
    /// Image carousel.
    pub gallery: Rect,
    /// News carousel.
    pub news: Rect,
    /// Quick-updates ticker.
    pub ticker: Rect,
    /// Scrolling marquee.
    pub marquee: Rect,
    /// Bottom status line.
    pub status: Rect,
}

impl BoardAreas {
    /// Area of one surface.
    pub fn surface(&self, which: FocusedSurface) -> Rect {
        match which {
            FocusedSurface::Images => self.gallery,
            FocusedSurface::News => self.news,
            FocusedSurface::Updates => self.ticker,
            FocusedSurface::Marquee => self.marquee,
        }
    }

    /// Surface under a terminal cell, if any.
    pub fn surface_at(&self, column: u16, row: u16) -> Option<FocusedSurface> {
        let position = Position::new(column, row);
        FocusedSurface::ALL
            .into_iter()
            .find(|which| self.surface(*which).contains(position))
    }
}

/// Split `area` into board regions.
///
/// Layout (top to bottom): header, gallery | news, ticker, marquee, status.
pub fn calculate_board_areas(area: Rect) -> BoardAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    let (header, body, status) = (vertical[0], vertical[1], vertical[2]);

    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(TICKER_HEIGHT),
            Constraint::Length(MARQUEE_HEIGHT),
        ])
        .split(body);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(GALLERY_WIDTH_PERCENT),
            Constraint::Percentage(100 - GALLERY_WIDTH_PERCENT),
        ])
        .split(bands[0]);

    BoardAreas {
        header,
        body,
        gallery: top[0],
        news: top[1],
        ticker: bands[1],
        marquee: bands[2],
        status,
    }
}

/// Render one full frame.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &BoardStyles) {
    let areas = calculate_board_areas(frame.area());

    render_header(frame, areas.header, state, styles);

    match &state.screen {
        Screen::Board => {
            carousel::render_gallery(frame, areas.gallery, state, styles);
            carousel::render_news(frame, areas.news, state, styles);
            ticker::render_ticker(frame, areas.ticker, state, styles);
            marquee::render_marquee(frame, areas.marquee, state, styles);
        }
        Screen::Article(_) => article::render_article(frame, areas.body, state, styles),
        Screen::NotFound(missing) => article::render_not_found(frame, areas.body, missing, styles),
    }

    render_status_bar(frame, areas.status, state, styles);

    if let Some(editor) = &state.form {
        form::render_form_overlay(frame, editor, state.profile(), styles);
    }
    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Bordered block for a surface, with the paused badge when auto-advance
/// is held.
pub(super) fn surface_block(
    state: &AppState,
    which: FocusedSurface,
    styles: &BoardStyles,
) -> Block<'static> {
    let focused = state.focus == which;
    let mut title = vec![Span::styled(
        format!(" {} ", which.title()),
        styles.border(focused),
    )];
    if state
        .surface(which)
        .engine()
        .is_some_and(RotationEngine::is_paused)
    {
        title.push(Span::styled(PAUSED_BADGE, styles.muted()));
    }

    Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border(focused))
        .title(Line::from(title))
}

/// Placeholder text for a surface with nothing to rotate.
///
/// Returns `None` once the surface has items.
pub(super) fn placeholder(state: &AppState, which: FocusedSurface) -> Option<&'static str> {
    let (loading, empty) = match which {
        FocusedSurface::Images => (state.images.is_loading(), state.images.items().is_empty()),
        FocusedSurface::News => (state.news.is_loading(), state.news.items().is_empty()),
        FocusedSurface::Updates => (state.updates.is_loading(), state.updates.items().is_empty()),
        FocusedSurface::Marquee => (state.marquee.is_loading(), state.marquee.items().is_empty()),
    };
    if loading {
        Some("Loading…")
    } else if empty {
        Some("Nothing to show yet.")
    } else {
        None
    }
}

/// Render the header: institution name, tagline and navigation.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let lines = match state.profile() {
        Some(profile) => {
            let mut nav = Vec::new();
            for (i, item) in profile.nav.iter().enumerate() {
                if i > 0 {
                    nav.push(Span::styled(" │ ", styles.muted()));
                }
                nav.push(Span::raw(format!("{} {}", item.icon.glyph(), item.label)));
            }
            vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", profile.icon.glyph(), profile.name),
                        styles.heading(),
                    ),
                    Span::styled(format!("  {}", profile.tagline), styles.muted()),
                ]),
                Line::from(nav),
            ]
        }
        None => vec![Line::from(Span::styled(
            "campusboard",
            styles.heading().add_modifier(Modifier::DIM),
        ))],
    };

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.border(false)),
    );
    frame.render_widget(header, area);
}

/// Keyboard hints shown when there is no status message.
fn build_keyboard_hints(state: &AppState) -> String {
    match state.screen {
        Screen::Board => format!(
            "q: quit | ?: help | Tab: focus ({}) | ←/→: rotate | p: pause | Enter: read | ]/[: institution | a: apply",
            state.focus.title()
        ),
        Screen::Article(_) => "q: quit | Esc: back | a: apply | ?: help".to_string(),
        Screen::NotFound(_) => "q: quit | Esc: back | ]/[: institution".to_string(),
    }
}

/// Render the status bar: the latest message, or keyboard hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let line = match &state.status {
        Some(message) => Line::from(Span::styled(
            message.text.clone(),
            styles.status(message.success),
        )),
        None => Line::from(Span::styled(build_keyboard_hints(state), styles.muted())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
