//! Admission enquiry form data.

use std::collections::BTreeMap;
use std::fmt;

/// One editable field of the admissions form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Applicant's full name.
    Name,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Programme applied for.
    Program,
    /// Free-text message.
    Message,
}

impl FormField {
    /// Every field, in tab order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Program,
        FormField::Message,
    ];

    /// Key used in the submitted record.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Program => "program",
            FormField::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Program => "Program",
            FormField::Message => "Message",
        }
    }

    /// Whether submission requires the field.
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Program)
    }

    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values typed into the admissions form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionForm {
    /// Applicant's full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, optional.
    pub phone: String,
    /// Program or year group applied for.
    pub program: String,
    /// Free-text message, optional.
    pub message: String,
}

impl AdmissionForm {
    /// Current value of a field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Program => &self.program,
            FormField::Message => &self.message,
        }
    }

    /// Mutable access to a field's value.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Program => &mut self.program,
            FormField::Message => &mut self.message,
        }
    }

    /// Required fields left blank, in tab order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).trim().is_empty())
            .collect()
    }

    /// Flat key/value record tagged with the institution code.
    pub fn to_record(&self, institution: &str) -> BTreeMap<String, String> {
        let mut record = BTreeMap::new();
        record.insert("institution".to_string(), institution.to_string());
        for field in FormField::ALL {
            record.insert(field.key().to_string(), self.field(field).trim().to_string());
        }
        record
    }
}
