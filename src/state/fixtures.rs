//! Shared test data for state and view tests.

use crate::config::ResolvedConfig;
use crate::model::{
    CarouselSlide, InstitutionCode, InstitutionRegistry, ItemKey, NewsArticle, Priority,
    QuickUpdate, UpdateKind,
};
use crate::source::ContentBundle;
use crate::state::AppState;
use chrono::NaiveDate;

pub(crate) const REGISTRY_TOML: &str = r#"
[[institution]]
code = "northfield"
name = "Northfield School"
short_name = "Northfield"
tagline = "Learning without limits"
contact = "admissions@northfield.example"

[[institution.nav]]
label = "Admissions"
icon = "graduation-cap"

[[institution.nav]]
label = "Results"
icon = "trophy"

[[institution]]
code = "riverside"
name = "Riverside College"
tagline = "By the river"

[institution.theme]
accent = "green"
"#;

pub(crate) fn registry() -> InstitutionRegistry {
    InstitutionRegistry::from_toml_str(REGISTRY_TOML).unwrap()
}

pub(crate) fn code(raw: &str) -> InstitutionCode {
    InstitutionCode::new(raw).unwrap()
}

pub(crate) fn slide(id: &str) -> CarouselSlide {
    CarouselSlide {
        id: ItemKey::new(id).unwrap(),
        image_url: format!("images/{id}.jpg"),
        caption: format!("Slide {id}"),
        alt: None,
    }
}

pub(crate) fn article(id: &str) -> NewsArticle {
    NewsArticle {
        id: ItemKey::new(id).unwrap(),
        title: format!("Headline {id}"),
        excerpt: format!("Excerpt {id}"),
        body: format!("First paragraph of {id}.\n\nSecond paragraph."),
        published: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        image_url: None,
    }
}

pub(crate) fn update(id: &str) -> QuickUpdate {
    QuickUpdate {
        id: ItemKey::new(id).unwrap(),
        title: format!("Notice {id}"),
        kind: UpdateKind::Announcement,
        priority: Priority::Medium,
        icon: None,
        date: None,
    }
}

/// Bundle with `n` items in every collection.
pub(crate) fn bundle(institution: &str, n: usize) -> ContentBundle {
    ContentBundle {
        institution: code(institution),
        news: (1..=n).map(|i| article(&format!("n{i}"))).collect(),
        updates: (1..=n).map(|i| update(&format!("u{i}"))).collect(),
        slides: (1..=n).map(|i| slide(&format!("s{i}"))).collect(),
    }
}

/// Board for `requested` with default surface configs.
pub(crate) fn app_state(requested: Option<&str>) -> AppState {
    let config = ResolvedConfig::default();
    AppState::new(
        registry(),
        config.surface_configs(),
        requested,
        false,
        config.cell_width,
    )
}
