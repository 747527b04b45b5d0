//! Content sources.
//!
//! This module provides the content loader contract and its implementations:
//! - [`DirectoryLoader`]: JSON documents under a content root
//! - [`MemoryLoader`]: fixed in-memory collections
//! - [`ContentFetcher`]: runs a loader on a background thread and hands the
//!   result back to the event loop over a channel
//!
//! Load failures never reach the board. [`load_bundle`] logs them and
//! substitutes an empty collection.

use crate::model::{CarouselSlide, InstitutionCode, LoadError, NewsArticle, QuickUpdate};
use tracing::warn;

pub mod directory;
pub mod fetch;
pub mod memory;

pub use directory::DirectoryLoader;
pub use fetch::ContentFetcher;
pub use memory::MemoryLoader;

/// Fetches display collections for one institution.
///
/// Each method returns the collection in display order.
pub trait ContentLoader: Send + Sync {
    /// News articles.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; callers degrade it to an empty collection.
    fn load_news(&self, institution: &InstitutionCode) -> Result<Vec<NewsArticle>, LoadError>;

    /// Quick updates for the ticker and marquee.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; callers degrade it to an empty collection.
    fn load_updates(&self, institution: &InstitutionCode) -> Result<Vec<QuickUpdate>, LoadError>;

    /// Image carousel slides.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; callers degrade it to an empty collection.
    fn load_slides(&self, institution: &InstitutionCode)
        -> Result<Vec<CarouselSlide>, LoadError>;
}

/// Every collection for one institution, failures already degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBundle {
    /// Institution the content belongs to.
    pub institution: InstitutionCode,
    /// News articles.
    pub news: Vec<NewsArticle>,
    /// Quick updates.
    pub updates: Vec<QuickUpdate>,
    /// Carousel slides.
    pub slides: Vec<CarouselSlide>,
}

impl ContentBundle {
    /// Bundle with no content at all.
    pub fn empty(institution: InstitutionCode) -> Self {
        Self {
            institution,
            news: Vec::new(),
            updates: Vec::new(),
            slides: Vec::new(),
        }
    }
}

fn or_empty<T>(
    result: Result<Vec<T>, LoadError>,
    institution: &InstitutionCode,
    what: &str,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(error) => {
            warn!(%institution, collection = what, %error, "content load failed, showing nothing");
            Vec::new()
        }
    }
}

/// Load all three collections, degrading each failure to an empty list.
pub fn load_bundle(loader: &dyn ContentLoader, institution: &InstitutionCode) -> ContentBundle {
    ContentBundle {
        institution: institution.clone(),
        news: or_empty(loader.load_news(institution), institution, "news"),
        updates: or_empty(loader.load_updates(institution), institution, "updates"),
        slides: or_empty(loader.load_slides(institution), institution, "carousel"),
    }
}
