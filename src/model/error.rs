//! Domain error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure loading one content collection for one institution.
///
/// Never fatal: the caller logs it and renders the surface as empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The collection file does not exist.
    #[error("Content file not found: {}", path.display())]
    NotFound {
        /// File that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read content file {}: {reason}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error text.
        reason: String,
    },

    /// The file is not a JSON array of the expected records.
    #[error("Failed to parse content file {}: {reason}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Decoder error text, with line and column.
        reason: String,
    },
}

/// Failure loading or validating the institution registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `institutions.toml` is missing or unreadable.
    #[error("Failed to read institution registry {}: {reason}", path.display())]
    Read {
        /// Registry file.
        path: PathBuf,
        /// Underlying I/O error text.
        reason: String,
    },

    /// `institutions.toml` is not valid TOML or has unknown keys.
    #[error("Failed to parse institution registry {}: {reason}", path.display())]
    Parse {
        /// Registry file.
        path: PathBuf,
        /// TOML error text.
        reason: String,
    },

    /// No `[[institution]]` entries.
    #[error("Institution registry lists no institutions")]
    Empty,

    /// Two entries share a code.
    #[error("Institution code {0:?} appears more than once")]
    DuplicateCode(String),

    /// A theme colour did not parse.
    #[error("Institution {institution:?} has invalid colour {value:?}")]
    InvalidColor {
        /// Code of the offending institution.
        institution: String,
        /// Colour text as written.
        value: String,
    },

    /// A required string field is blank.
    #[error("Institution {institution:?} is missing required field {field}")]
    MissingField {
        /// Code of the offending institution.
        institution: String,
        /// Name of the blank field.
        field: &'static str,
    },
}

/// Failure persisting an admission application.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Creating the directory or appending to the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be encoded as JSON.
    #[error("Failed to serialize application: {0}")]
    Serialize(String),

    /// The sink refused the application.
    #[error("Application rejected: {0}")]
    Rejected(String),
}
