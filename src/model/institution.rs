//! Per-institution configuration records.
//!
//! Every institution in the group carries an explicit profile: display
//! names, theme colours, navigation items and contact line. Profiles are
//! read from `institutions.toml` at the content root and validated as a
//! whole before anything is rendered.
//!
//! ```toml
//! [[institution]]
//! code = "northfield"
//! name = "Northfield Senior Secondary School"
//! tagline = "Learning without limits"
//!
//! [institution.theme]
//! accent = "cyan"
//!
//! [[institution.nav]]
//! label = "Admissions"
//! icon = "graduation-cap"
//! ```

use super::error::RegistryError;
use super::icon::IconTag;
use super::identifiers::InstitutionCode;
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// File name of the registry under the content root.
pub const REGISTRY_FILE: &str = "institutions.toml";

/// Theme colours of one institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Borders, headings and the focused surface.
    pub accent: Color,
    /// Page indicator and marquee text.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            highlight: Color::Yellow,
        }
    }
}

/// One navigation entry in the header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Icon tag.
    pub icon: IconTag,
}

/// Validated profile of one institution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionProfile {
    /// Unique code; also the content sub-directory name.
    pub code: InstitutionCode,
    /// Full display name.
    pub name: String,
    /// Short name for tight spaces. Defaults to `name`.
    pub short_name: String,
    /// One-line motto.
    pub tagline: String,
    /// Longer description, used for metadata.
    pub description: String,
    /// Brand icon.
    pub icon: IconTag,
    /// Colours.
    pub theme: Theme,
    /// Header navigation.
    pub nav: Vec<NavItem>,
    /// Admissions contact line.
    pub contact: Option<String>,
}

// ===== Raw TOML shape =====

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default, rename = "institution")]
    institutions: Vec<RawInstitution>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInstitution {
    code: InstitutionCode,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: Option<IconTag>,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    theme: RawTheme,
    #[serde(default)]
    nav: Vec<NavItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTheme {
    #[serde(default)]
    accent: Option<String>,
    #[serde(default)]
    highlight: Option<String>,
}

impl RawInstitution {
    fn validate(self) -> Result<InstitutionProfile, RegistryError> {
        let code = self.code.as_str().to_string();
        if self.name.trim().is_empty() {
            return Err(RegistryError::MissingField {
                institution: code,
                field: "name",
            });
        }
        if self.nav.iter().any(|item| item.label.trim().is_empty()) {
            return Err(RegistryError::MissingField {
                institution: code,
                field: "nav.label",
            });
        }

        let defaults = Theme::default();
        let theme = Theme {
            accent: parse_color(&code, self.theme.accent.as_deref(), defaults.accent)?,
            highlight: parse_color(&code, self.theme.highlight.as_deref(), defaults.highlight)?,
        };

        let short_name = self
            .short_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.name.clone());

        Ok(InstitutionProfile {
            code: self.code,
            name: self.name,
            short_name,
            tagline: self.tagline,
            description: self.description,
            icon: self.icon.unwrap_or(IconTag::GraduationCap),
            theme,
            nav: self.nav,
            contact: self.contact,
        })
    }
}

fn parse_color(
    institution: &str,
    raw: Option<&str>,
    fallback: Color,
) -> Result<Color, RegistryError> {
    match raw {
        None => Ok(fallback),
        Some(value) => Color::from_str(value).map_err(|_| RegistryError::InvalidColor {
            institution: institution.to_string(),
            value: value.to_string(),
        }),
    }
}

// ===== Registry =====

/// Ordered, validated set of institution profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionRegistry {
    institutions: Vec<InstitutionProfile>,
}

impl InstitutionRegistry {
    /// Load and validate `institutions.toml` from the content root.
    ///
    /// # Errors
    ///
    /// Unlike content collections, a broken registry is fatal: there is
    /// nothing meaningful to render without it.
    pub fn load(content_dir: &Path) -> Result<Self, RegistryError> {
        let path = content_dir.join(REGISTRY_FILE);
        let contents = std::fs::read_to_string(&path).map_err(|e| RegistryError::Read {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            RegistryError::Parse { reason, .. } => RegistryError::Parse { path, reason },
            other => other,
        })
    }

    /// Parse and validate registry TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(contents).map_err(|e| RegistryError::Parse {
            path: REGISTRY_FILE.into(),
            reason: e.to_string(),
        })?;

        let institutions = file
            .institutions
            .into_iter()
            .map(RawInstitution::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_profiles(institutions)
    }

    /// Build from already-validated profiles, checking registry-wide rules.
    pub fn from_profiles(institutions: Vec<InstitutionProfile>) -> Result<Self, RegistryError> {
        if institutions.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for profile in &institutions {
            if !seen.insert(profile.code.as_str()) {
                return Err(RegistryError::DuplicateCode(profile.code.to_string()));
            }
        }
        Ok(Self { institutions })
    }

    /// Look up a profile by code.
    pub fn get(&self, code: &str) -> Option<&InstitutionProfile> {
        self.institutions.iter().find(|p| p.code.as_str() == code)
    }

    /// First profile (the default when nothing is selected).
    pub fn first(&self) -> &InstitutionProfile {
        // Non-empty by construction.
        &self.institutions[0]
    }

    /// Profile after (`forward`) or before `code`, wrapping around.
    pub fn neighbour(&self, code: &str, forward: bool) -> &InstitutionProfile {
        let len = self.institutions.len();
        let position = self
            .institutions
            .iter()
            .position(|p| p.code.as_str() == code);
        let index = match (position, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        &self.institutions[index]
    }

    /// Iterate profiles in file order.
    pub fn iter(&self) -> impl Iterator<Item = &InstitutionProfile> {
        self.institutions.iter()
    }

    /// Number of institutions. Never zero.
    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}
