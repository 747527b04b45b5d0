//! Rotatable content records.
//!
//! These are the items the content loaders return and the rotating surfaces
//! display. They are immutable once loaded.

use super::icon::IconTag;
use super::identifiers::ItemKey;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Anything a rotating surface can display.
pub trait Rotatable {
    /// Stable identity of the item.
    fn key(&self) -> &ItemKey;
}

/// One slide of the image carousel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselSlide {
    /// Stable key.
    pub id: ItemKey,
    /// Image location (URL or path). Shown as text on a terminal.
    pub image_url: String,
    /// Headline shown over the slide.
    pub caption: String,
    /// Alternative text, used as the slide's body line.
    #[serde(default)]
    pub alt: Option<String>,
}

impl Rotatable for CarouselSlide {
    fn key(&self) -> &ItemKey {
        &self.id
    }
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsArticle {
    /// Stable key, also used for `--article` lookup.
    pub id: ItemKey,
    /// Headline.
    pub title: String,
    /// Short teaser shown on carousel cards.
    pub excerpt: String,
    /// Full text. Paragraphs are separated by blank lines.
    #[serde(default)]
    pub body: String,
    /// Publication date.
    pub published: NaiveDate,
    /// Optional lead image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewsArticle {
    /// Body split into paragraphs, falling back to the excerpt when empty.
    pub fn paragraphs(&self) -> Vec<&str> {
        let source = if self.body.trim().is_empty() {
            self.excerpt.as_str()
        } else {
            self.body.as_str()
        };
        source
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl Rotatable for NewsArticle {
    fn key(&self) -> &ItemKey {
        &self.id
    }
}

/// Classification of a quick update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// General announcement.
    Announcement,
    /// Upcoming event.
    Event,
    /// Examination notice.
    Exam,
    /// Admissions notice.
    Admission,
    /// Holiday / closure.
    Holiday,
}

impl UpdateKind {
    /// Short label for the ticker.
    pub fn label(self) -> &'static str {
        match self {
            UpdateKind::Announcement => "NOTICE",
            UpdateKind::Event => "EVENT",
            UpdateKind::Exam => "EXAM",
            UpdateKind::Admission => "ADMISSION",
            UpdateKind::Holiday => "HOLIDAY",
        }
    }

    /// Icon used when the update does not name one.
    pub fn default_icon(self) -> IconTag {
        match self {
            UpdateKind::Announcement => IconTag::Megaphone,
            UpdateKind::Event => IconTag::Calendar,
            UpdateKind::Exam => IconTag::Book,
            UpdateKind::Admission => IconTag::GraduationCap,
            UpdateKind::Holiday => IconTag::Bell,
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority of a quick update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Urgent.
    High,
    /// Normal.
    #[default]
    Medium,
    /// Informational.
    Low,
}

/// A short announcement shown in the ticker and the marquee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickUpdate {
    /// Stable key.
    pub id: ItemKey,
    /// Announcement text.
    pub title: String,
    /// Classification.
    pub kind: UpdateKind,
    /// Priority, `medium` when omitted.
    #[serde(default)]
    pub priority: Priority,
    /// Icon override.
    #[serde(default)]
    pub icon: Option<IconTag>,
    /// Date the update refers to.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl QuickUpdate {
    /// Icon to render: the explicit one, or the kind's default.
    pub fn icon(&self) -> IconTag {
        self.icon.unwrap_or_else(|| self.kind.default_icon())
    }
}

impl Rotatable for QuickUpdate {
    fn key(&self) -> &ItemKey {
        &self.id
    }
}
