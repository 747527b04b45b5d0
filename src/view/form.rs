//! Admissions enquiry form overlay.

use super::constants::{FORM_POPUP_HEIGHT, FORM_POPUP_WIDTH_PERCENT};
use super::styles::BoardStyles;
use crate::model::{FormField, InstitutionProfile};
use crate::state::FormEditor;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the label column, including the required marker.
const LABEL_WIDTH: usize = 10;

fn field_line(editor: &FormEditor, field: FormField, styles: &BoardStyles) -> Line<'static> {
    let active = editor.active_field() == field;
    let marker = if field.is_required() { "*" } else { " " };
    let label = format!("{:>width$}{marker} ", field.label(), width = LABEL_WIDTH - 1);
    let mut value = editor.form().field(field).to_string();
    if active {
        value.push('▏');
    }
    let label_style = if active {
        styles.active_field()
    } else {
        styles.muted()
    };
    Line::from(vec![Span::styled(label, label_style), Span::raw(value)])
}

/// Render the form centered over the current screen.
pub fn render_form_overlay(
    frame: &mut Frame,
    editor: &FormEditor,
    profile: Option<&InstitutionProfile>,
    styles: &BoardStyles,
) {
    let area = frame.area();
    let width = area.width * FORM_POPUP_WIDTH_PERCENT / 100;
    let height = FORM_POPUP_HEIGHT.min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| field_line(editor, *field, styles))
        .collect();
    lines.push(Line::default());
    lines.push(match &editor.notice {
        Some(notice) => Line::from(Span::styled(notice.clone(), styles.status(false))),
        None => Line::from(Span::styled(
            "Tab: next field | Enter: submit | Esc: cancel",
            styles.muted(),
        )),
    });
    if let Some(contact) = profile.and_then(|p| p.contact.as_deref()) {
        lines.push(Line::from(Span::styled(
            format!("Questions? {contact}"),
            styles.muted(),
        )));
    }

    let title = match profile {
        Some(profile) => format!(" Apply to {} ", profile.short_name),
        None => " Apply ".to_string(),
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles.border(true)),
    );
    frame.render_widget(form, popup);
}
