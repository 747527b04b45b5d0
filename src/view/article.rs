//! Article detail and not-found screens.

use super::styles::BoardStyles;
use crate::state::{AppState, Missing};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the open article as wrapped paragraphs under its title and date.
pub fn render_article(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let Some(article) = state.current_article() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(article.title.clone(), styles.heading())),
        Line::from(Span::styled(
            article.published.format("%A %-d %B %Y").to_string(),
            styles.muted(),
        )),
    ];
    if let Some(url) = &article.image_url {
        lines.push(Line::from(Span::styled(format!("[ {url} ]"), styles.muted())));
    }
    for paragraph in article.paragraphs() {
        lines.push(Line::default());
        lines.push(Line::from(paragraph.to_string()));
    }

    let view = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border(true))
                .title(" News ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(view, area);
}

/// Render the not-found screen for an unknown institution or article.
pub fn render_not_found(frame: &mut Frame, area: Rect, missing: &Missing, styles: &BoardStyles) {
    let detail = match missing {
        Missing::Institution(code) => format!("No institution with code \"{code}\"."),
        Missing::Article(id) => format!("No article with id \"{id}\"."),
    };
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Not found", styles.heading())),
        Line::default(),
        Line::from(detail),
        Line::default(),
        Line::from(Span::styled(
            "Press ] or [ to browse institutions.",
            styles.muted(),
        )),
    ];
    let view = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(view, area);
}
