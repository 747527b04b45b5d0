//! Closed set of icon tags.
//!
//! Content files name icons by kebab-case tag. Deserialization rejects any
//! tag outside this enum, so a typo fails at load time instead of rendering
//! a blank.

use serde::Deserialize;
use std::fmt;

/// Icon tag usable in navigation items and quick updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    /// Graduation cap.
    GraduationCap,
    /// Open book.
    Book,
    /// Calendar page.
    Calendar,
    /// Megaphone.
    Megaphone,
    /// Trophy.
    Trophy,
    /// School bus.
    Bus,
    /// Lab flask.
    Flask,
    /// Group of people.
    Users,
    /// Bell.
    Bell,
    /// Information mark.
    Info,
    /// Home.
    Home,
    /// Envelope.
    Mail,
    /// Image/photo.
    Image,
    /// Newspaper.
    Newspaper,
}

impl IconTag {
    /// Every tag, in declaration order.
    pub const ALL: [IconTag; 14] = [
        IconTag::GraduationCap,
        IconTag::Book,
        IconTag::Calendar,
        IconTag::Megaphone,
        IconTag::Trophy,
        IconTag::Bus,
        IconTag::Flask,
        IconTag::Users,
        IconTag::Bell,
        IconTag::Info,
        IconTag::Home,
        IconTag::Mail,
        IconTag::Image,
        IconTag::Newspaper,
    ];

    /// Terminal glyph for the tag.
    pub fn glyph(self) -> &'static str {
        match self {
            IconTag::GraduationCap => "🎓",
            IconTag::Book => "📖",
            IconTag::Calendar => "📅",
            IconTag::Megaphone => "📣",
            IconTag::Trophy => "🏆",
            IconTag::Bus => "🚌",
            IconTag::Flask => "⚗",
            IconTag::Users => "👥",
            IconTag::Bell => "🔔",
            IconTag::Info => "ℹ",
            IconTag::Home => "⌂",
            IconTag::Mail => "✉",
            IconTag::Image => "▣",
            IconTag::Newspaper => "📰",
        }
    }

    /// The tag as written in content files.
    pub fn as_str(self) -> &'static str {
        match self {
            IconTag::GraduationCap => "graduation-cap",
            IconTag::Book => "book",
            IconTag::Calendar => "calendar",
            IconTag::Megaphone => "megaphone",
            IconTag::Trophy => "trophy",
            IconTag::Bus => "bus",
            IconTag::Flask => "flask",
            IconTag::Users => "users",
            IconTag::Bell => "bell",
            IconTag::Info => "info",
            IconTag::Home => "home",
            IconTag::Mail => "mail",
            IconTag::Image => "image",
            IconTag::Newspaper => "newspaper",
        }
    }
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
