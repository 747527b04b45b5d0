//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod application;
pub mod content;
pub mod error;
pub mod icon;
pub mod identifiers;
pub mod institution;
pub mod key_action;
pub mod metadata;

// Re-export for convenience
pub use application::{AdmissionForm, FormField};
pub use content::{CarouselSlide, NewsArticle, Priority, QuickUpdate, Rotatable, UpdateKind};
pub use error::{LoadError, RegistryError, SubmitError};
pub use icon::IconTag;
pub use identifiers::{InstitutionCode, InvalidInstitutionCode, InvalidItemKey, ItemKey};
pub use institution::{InstitutionProfile, InstitutionRegistry, NavItem, Theme};
pub use key_action::KeyAction;
pub use metadata::{page_metadata, PageMetadata};
