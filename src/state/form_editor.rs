//! Admissions form editing state.

use crate::model::{AdmissionForm, FormField};

/// Overlay editor for the admissions enquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEditor {
    form: AdmissionForm,
    field: FormField,
    /// Validation or submission message shown inside the overlay.
    pub notice: Option<String>,
}

impl Default for FormEditor {
    fn default() -> Self {
        Self {
            form: AdmissionForm::default(),
            field: FormField::Name,
            notice: None,
        }
    }
}

impl FormEditor {
    /// Empty form with the cursor on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values entered so far.
    pub fn form(&self) -> &AdmissionForm {
        &self.form
    }

    /// Field receiving input.
    pub fn active_field(&self) -> FormField {
        self.field
    }

    /// Tab.
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Shift+Tab.
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Type a character into the active field.
    pub fn insert_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.form.field_mut(self.field).push(ch);
        }
    }

    /// Delete the last character of the active field.
    pub fn backspace(&mut self) {
        self.form.field_mut(self.field).pop();
    }
}
