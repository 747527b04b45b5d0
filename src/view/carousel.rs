//! Image and news carousels.

use super::constants::{PAGE_DOT_ACTIVE, PAGE_DOT_INACTIVE};
use super::layout::{placeholder, surface_block};
use super::styles::BoardStyles;
use crate::model::NewsArticle;
use crate::rotation::RotationEngine;
use crate::state::{AppState, FocusedSurface, SurfaceControl};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Page indicator: one dot per page, the current page filled.
///
/// Empty when there is only one page.
pub fn page_dots(engine: &RotationEngine, styles: &BoardStyles) -> Line<'static> {
    let pages = engine.page_count();
    if pages <= 1 {
        return Line::default();
    }
    let current = engine.current_index();
    let spans: Vec<Span> = (0..pages)
        .map(|page| {
            if page == current {
                Span::styled(format!("{PAGE_DOT_ACTIVE} "), styles.highlight())
            } else {
                Span::styled(format!("{PAGE_DOT_INACTIVE} "), styles.muted())
            }
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

/// Split a surface's inner area into content and a one-line dots row.
fn split_dots(inner: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    (chunks[0], chunks[1])
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &'static str, styles: &BoardStyles) {
    let paragraph = Paragraph::new(Line::from(Span::styled(text, styles.muted())))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Single-slide image carousel.
///
/// Terminals cannot show the image itself, so the slide renders as its
/// caption with the alt text (or image path) underneath.
pub fn render_gallery(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let block = surface_block(state, FocusedSurface::Images, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = placeholder(state, FocusedSurface::Images) {
        render_placeholder(frame, inner, text, styles);
        return;
    }
    let (content, dots) = split_dots(inner);

    if let Some(slide) = state.images.current() {
        let description = match &slide.alt {
            Some(alt) => alt.clone(),
            None => format!("[ {} ]", slide.image_url),
        };
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(slide.caption.clone(), styles.heading())),
            Line::from(Span::styled(description, styles.muted())),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content);
    }

    if let Some(engine) = state.images.engine() {
        frame.render_widget(Paragraph::new(page_dots(engine, styles)), dots);
    }
}

/// Responsive news carousel: one card per item in view.
pub fn render_news(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let block = surface_block(state, FocusedSurface::News, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = placeholder(state, FocusedSurface::News) {
        render_placeholder(frame, inner, text, styles);
        return;
    }
    let (content, dots) = split_dots(inner);

    let visible = state.news.visible();
    if !visible.is_empty() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, visible.len() as u32); visible.len()])
            .split(content);
        for (article, column) in visible.iter().zip(columns.iter()) {
            render_news_card(frame, *column, article, styles);
        }
    }

    if let Some(engine) = state.news.engine() {
        frame.render_widget(Paragraph::new(page_dots(engine, styles)), dots);
    }
}

fn render_news_card(frame: &mut Frame, area: Rect, article: &NewsArticle, styles: &BoardStyles) {
    let lines = vec![
        Line::from(Span::styled(article.title.clone(), styles.heading())),
        Line::from(Span::styled(
            article.published.format("%-d %b %Y").to_string(),
            styles.muted(),
        )),
        Line::default(),
        Line::from(article.excerpt.clone()),
    ];
    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border(false)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
