//! Board styling.
//!
//! Colours come from the selected institution's theme; quick updates are
//! coloured by priority. Everything collapses to the default style when
//! colour output is disabled.

use crate::model::{Priority, Theme};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `color = false` after config resolution)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colours on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== BoardStyles =====

/// Resolved styles for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardStyles {
    color: bool,
    theme: Theme,
}

impl BoardStyles {
    /// Styles for `theme`, or plain styles when colours are disabled.
    pub fn new(theme: Theme, config: ColorConfig) -> Self {
        Self {
            color: config.colors_enabled(),
            theme,
        }
    }

    fn fg(&self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Surface border; the focused surface uses the theme accent.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.fg(self.theme.accent).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Color::DarkGray)
        }
    }

    /// Headings and institution name.
    pub fn heading(&self) -> Style {
        self.fg(self.theme.accent).add_modifier(Modifier::BOLD)
    }

    /// Page indicator and marquee text.
    pub fn highlight(&self) -> Style {
        self.fg(self.theme.highlight)
    }

    /// Secondary text: dates, image paths, hints.
    pub fn muted(&self) -> Style {
        self.fg(Color::Gray)
    }

    /// Quick update text by priority: high is red, medium yellow, low plain.
    pub fn priority(&self, priority: Priority) -> Style {
        match priority {
            Priority::High => self.fg(Color::Red).add_modifier(Modifier::BOLD),
            Priority::Medium => self.fg(Color::Yellow),
            Priority::Low => Style::default(),
        }
    }

    /// Status bar message.
    pub fn status(&self, success: bool) -> Style {
        if success {
            self.fg(Color::Green)
        } else {
            self.fg(Color::Red)
        }
    }

    /// The field being edited in the form.
    pub fn active_field(&self) -> Style {
        self.fg(self.theme.highlight).add_modifier(Modifier::BOLD)
    }
}

impl Default for BoardStyles {
    fn default() -> Self {
        Self::new(Theme::default(), ColorConfig::enabled())
    }
}

// ===== Tests =====
