//! Quick-updates ticker: a three-row window sliding over the updates.

use super::layout::{placeholder, surface_block};
use super::styles::BoardStyles;
use crate::model::QuickUpdate;
use crate::state::{AppState, FocusedSurface};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the padded kind label column.
const KIND_COLUMN_WIDTH: usize = 13;

/// One ticker row: icon, kind label, title and optional date.
pub fn ticker_line(update: &QuickUpdate, styles: &BoardStyles) -> Line<'static> {
    let style = styles.priority(update.priority);
    let mut spans = vec![
        Span::styled(format!("{} ", update.icon().glyph()), style),
        Span::styled(
            format!("{:<width$}", update.kind.label(), width = KIND_COLUMN_WIDTH),
            styles.muted(),
        ),
        Span::styled(update.title.clone(), style),
    ];
    if let Some(date) = update.date {
        spans.push(Span::styled(
            format!("  {}", date.format("%-d %b")),
            styles.muted(),
        ));
    }
    Line::from(spans)
}

/// Render the visible page of quick updates, one row per update.
pub fn render_ticker(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let block = surface_block(state, FocusedSurface::Updates, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = placeholder(state, FocusedSurface::Updates) {
        let paragraph = Paragraph::new(Line::from(Span::styled(text, styles.muted())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let lines: Vec<Line> = state
        .updates
        .visible()
        .iter()
        .map(|update| ticker_line(update, styles))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
