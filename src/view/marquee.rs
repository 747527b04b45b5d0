//! Scrolling announcement marquee.
//!
//! The marquee engine rotates over the character columns of the strip, so
//! its current index is the scroll offset. Rendering wraps the strip around
//! to fill the band.

use super::layout::{placeholder, surface_block};
use super::styles::BoardStyles;
use crate::state::{AppState, FocusedSurface, SurfaceControl};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Visible text of a strip scrolled by `offset`, exactly `width` cells wide.
///
/// The strip repeats to fill the width. A wide glyph that would straddle
/// the right edge is replaced by padding.
pub fn marquee_line(chars: &[char], offset: usize, width: usize) -> String {
    let mut line = String::new();
    if chars.is_empty() {
        return line;
    }

    let mut used = 0;
    let budget = chars.len().saturating_mul(width.max(1));
    for ch in chars.iter().cycle().skip(offset % chars.len()).take(budget) {
        let cells = ch.width().unwrap_or(0);
        if used + cells > width {
            break;
        }
        line.push(*ch);
        used += cells;
    }
    line.extend(std::iter::repeat(' ').take(width - used));
    line
}

/// Render the announcement strip, scrolled to the marquee engine's offset.
pub fn render_marquee(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let block = surface_block(state, FocusedSurface::Marquee, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = placeholder(state, FocusedSurface::Marquee) {
        let paragraph = Paragraph::new(Line::from(Span::styled(text, styles.muted())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let offset = state
        .marquee
        .engine()
        .map_or(0, |engine| engine.current_index());
    let text = marquee_line(state.marquee_chars(), offset, usize::from(inner.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles.highlight()))),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn line_starts_at_offset_and_wraps() {
        let strip = chars("ABCDEF");

        insta::assert_snapshot!(format!("|{}|", marquee_line(&strip, 0, 4)), @"|ABCD|");
        insta::assert_snapshot!(format!("|{}|", marquee_line(&strip, 4, 4)), @"|EFAB|");
        insta::assert_snapshot!(format!("|{}|", marquee_line(&strip, 6, 4)), @"|ABCD|");
    }

    #[test]
    fn short_strip_repeats_to_fill_width() {
        let strip = chars("ab ");

        insta::assert_snapshot!(format!("|{}|", marquee_line(&strip, 1, 8)), @"|b ab ab |");
    }

    #[test]
    fn wide_glyph_at_edge_becomes_padding() {
        let strip = chars("ab📣cd");

        let line = marquee_line(&strip, 0, 3);

        assert_eq!(line, "ab ");
    }

    #[test]
    fn empty_strip_renders_nothing() {
        assert_eq!(marquee_line(&[], 3, 10), "");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(marquee_line(&chars("abc"), 0, 0), "");
    }
}
