//! Per-institution page metadata.

use super::icon::IconTag;
use super::institution::InstitutionRegistry;

/// Title, description and icon describing one institution's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Window title, `"<name> | <tagline>"` or just the name.
    pub title: String,
    /// Description, falling back to the tagline.
    pub description: String,
    /// Brand icon.
    pub icon: IconTag,
}

/// Look up page metadata for an institution.
///
/// Pure; `None` for an unknown code.
pub fn page_metadata(registry: &InstitutionRegistry, code: &str) -> Option<PageMetadata> {
    let profile = registry.get(code)?;

    let title = if profile.tagline.is_empty() {
        profile.name.clone()
    } else {
        format!("{} | {}", profile.name, profile.tagline)
    };
    let description = if profile.description.is_empty() {
        profile.tagline.clone()
    } else {
        profile.description.clone()
    };

    Some(PageMetadata {
        title,
        description,
        icon: profile.icon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> InstitutionRegistry {
        InstitutionRegistry::from_toml_str(
            r#"
            [[institution]]
            code = "northfield"
            name = "Northfield School"
            tagline = "Learning without limits"
            icon = "book"

            [[institution]]
            code = "riverside"
            name = "Riverside College"
            description = "A college by the river."
            "#,
        )
        .unwrap()
    }

    #[test]
    fn title_joins_name_and_tagline() {
        let meta = page_metadata(&registry(), "northfield").unwrap();

        assert_eq!(meta.title, "Northfield School | Learning without limits");
        assert_eq!(meta.description, "Learning without limits");
        assert_eq!(meta.icon, IconTag::Book);
    }

    #[test]
    fn missing_tagline_uses_bare_name() {
        let meta = page_metadata(&registry(), "riverside").unwrap();

        assert_eq!(meta.title, "Riverside College");
        assert_eq!(meta.description, "A college by the river.");
    }

    #[test]
    fn unknown_code_has_no_metadata() {
        assert_eq!(page_metadata(&registry(), "nowhere"), None);
    }
}
