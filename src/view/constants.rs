//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header (institution name, tagline and navigation).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the marquee band (border + one text row).
pub const MARQUEE_HEIGHT: u16 = 3;

/// Height of the quick-updates ticker: three rows plus borders.
pub const TICKER_HEIGHT: u16 = crate::config::loader::TICKER_ROWS as u16 + 2;

/// Width percentage of the image carousel in the top band.
pub const GALLERY_WIDTH_PERCENT: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the admissions form popup.
pub const FORM_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height of the admissions form popup in lines.
///
/// Five fields, a notice line, a hint line and borders.
pub const FORM_POPUP_HEIGHT: u16 = 11;

/// Longest the event loop blocks before polling background content.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Filled page indicator.
pub const PAGE_DOT_ACTIVE: &str = "●";

/// Unfilled page indicator.
pub const PAGE_DOT_INACTIVE: &str = "○";

/// Badge appended to a paused surface's title.
pub const PAUSED_BADGE: &str = " ⏸ paused ";
