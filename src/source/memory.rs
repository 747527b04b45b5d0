//! In-memory content loader.

use super::ContentLoader;
use crate::model::{CarouselSlide, InstitutionCode, LoadError, NewsArticle, QuickUpdate};
use std::collections::HashMap;

/// Serves fixed collections per institution. Unknown institutions get
/// empty collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    news: HashMap<InstitutionCode, Vec<NewsArticle>>,
    updates: HashMap<InstitutionCode, Vec<QuickUpdate>>,
    slides: HashMap<InstitutionCode, Vec<CarouselSlide>>,
}

impl MemoryLoader {
    /// Empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the news collection for an institution.
    pub fn with_news(mut self, institution: InstitutionCode, news: Vec<NewsArticle>) -> Self {
        self.news.insert(institution, news);
        self
    }

    /// Set the quick-updates collection for an institution.
    pub fn with_updates(mut self, institution: InstitutionCode, updates: Vec<QuickUpdate>) -> Self {
        self.updates.insert(institution, updates);
        self
    }

    /// Set the carousel collection for an institution.
    pub fn with_slides(mut self, institution: InstitutionCode, slides: Vec<CarouselSlide>) -> Self {
        self.slides.insert(institution, slides);
        self
    }
}

impl ContentLoader for MemoryLoader {
    fn load_news(&self, institution: &InstitutionCode) -> Result<Vec<NewsArticle>, LoadError> {
        Ok(self.news.get(institution).cloned().unwrap_or_default())
    }

    fn load_updates(&self, institution: &InstitutionCode) -> Result<Vec<QuickUpdate>, LoadError> {
        Ok(self.updates.get(institution).cloned().unwrap_or_default())
    }

    fn load_slides(
        &self,
        institution: &InstitutionCode,
    ) -> Result<Vec<CarouselSlide>, LoadError> {
        Ok(self.slides.get(institution).cloned().unwrap_or_default())
    }
}
