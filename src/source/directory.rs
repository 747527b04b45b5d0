//! Content directory loader.
//!
//! Layout under the content root:
//!
//! ```text
//! <root>/institutions.toml
//! <root>/<code>/news.json
//! <root>/<code>/updates.json
//! <root>/<code>/carousel.json
//! ```
//!
//! Each JSON file holds an array of records in display order.

use super::ContentLoader;
use crate::model::{CarouselSlide, InstitutionCode, LoadError, NewsArticle, QuickUpdate};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the news collection.
pub const NEWS_FILE: &str = "news.json";
/// File name of the quick-updates collection.
pub const UPDATES_FILE: &str = "updates.json";
/// File name of the carousel collection.
pub const SLIDES_FILE: &str = "carousel.json";

/// Reads content collections from JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, institution: &InstitutionCode, file: &str) -> PathBuf {
        self.root.join(institution.as_str()).join(file)
    }

    fn load<T: DeserializeOwned>(
        &self,
        institution: &InstitutionCode,
        file: &str,
    ) -> Result<Vec<T>, LoadError> {
        let path = self.collection_path(institution, file);
        let items = read_json_array(&path)?;
        debug!(path = %path.display(), count = items.len(), "loaded collection");
        Ok(items)
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl ContentLoader for DirectoryLoader {
    fn load_news(&self, institution: &InstitutionCode) -> Result<Vec<NewsArticle>, LoadError> {
        self.load(institution, NEWS_FILE)
    }

    fn load_updates(&self, institution: &InstitutionCode) -> Result<Vec<QuickUpdate>, LoadError> {
        self.load(institution, UPDATES_FILE)
    }

    fn load_slides(
        &self,
        institution: &InstitutionCode,
    ) -> Result<Vec<CarouselSlide>, LoadError> {
        self.load(institution, SLIDES_FILE)
    }
}
