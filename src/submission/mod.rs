//! Admission application submission.
//!
//! The board hands a flat key/value record to an [`ApplicationSink`] and
//! always gets a [`SubmissionResult`] back. Sink errors are logged and
//! turned into a fixed user-facing message; they never propagate.

use crate::model::{AdmissionForm, FormField, SubmitError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};

/// Shown when the sink fails for any reason.
pub const FAILURE_MESSAGE: &str = "Failed to submit application. Please try again.";

/// Shown when the sink accepts the application.
pub const SUCCESS_MESSAGE: &str = "Application submitted. We will contact you soon.";

/// Flat key/value application record.
pub type ApplicationRecord = BTreeMap<String, String>;

/// Outcome shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// Whether the application was stored.
    pub success: bool,
    /// User-facing message.
    pub message: String,
}

impl SubmissionResult {
    fn ok() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Destination for submitted applications.
pub trait ApplicationSink: Send + Sync {
    /// Persist one application record.
    ///
    /// # Errors
    ///
    /// Any [`SubmitError`]; the caller converts it into a failed
    /// [`SubmissionResult`].
    fn submit(&self, record: &ApplicationRecord, received_at: DateTime<Utc>)
        -> Result<(), SubmitError>;
}

/// Validate the form, then hand it to the sink.
///
/// Missing required fields fail without touching the sink.
pub fn submit_application(
    sink: &dyn ApplicationSink,
    institution: &str,
    form: &AdmissionForm,
    received_at: DateTime<Utc>,
) -> SubmissionResult {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return SubmissionResult::failed(missing_fields_message(&missing));
    }

    let record = form.to_record(institution);
    match sink.submit(&record, received_at) {
        Ok(()) => {
            info!(institution, "admission application submitted");
            SubmissionResult::ok()
        }
        Err(e) => {
            error!(institution, error = %e, "admission application submission failed");
            SubmissionResult::failed(FAILURE_MESSAGE)
        }
    }
}

fn missing_fields_message(missing: &[FormField]) -> String {
    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    format!("Please fill in: {}.", labels.join(", "))
}

// ===== JSON-lines sink =====

#[derive(Serialize)]
struct StoredApplication<'a> {
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    record: &'a ApplicationRecord,
}

/// Appends each application as one JSON object per line.
#[derive(Debug)]
pub struct JsonlApplicationSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlApplicationSink {
    /// Sink appending to `path`. The file and its directory are created on
    /// first submission.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplicationSink for JsonlApplicationSink {
    fn submit(
        &self,
        record: &ApplicationRecord,
        received_at: DateTime<Utc>,
    ) -> Result<(), SubmitError> {
        let mut line = serde_json::to_string(&StoredApplication {
            received_at,
            record,
        })
        .map_err(|e| SubmitError::Serialize(e.to_string()))?;
        line.push('\n');

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| SubmitError::Rejected("application sink lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
