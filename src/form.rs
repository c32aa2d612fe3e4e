// =============================================================================
// Contact Form - Form Model
// =============================================================================
// Table of Contents:
// 1. Fields
// 2. Form Data
// 3. Status Flags
// 4. Snapshot (derived display state)
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::TextKey;
use crate::validation::{FieldValidity, EMAIL_FORMAT_HINT, PHONE_FORMAT_HINT};

// -----------------------------------------------------------------------------
// 1. Fields
// -----------------------------------------------------------------------------

/// The four inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    #[serde(rename = "fullname")]
    FullName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Fields in render order.
    pub const ALL: [ContactField; 4] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// The `name` attribute of the rendered input.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullname",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    /// Localized placeholder key.
    pub fn placeholder(&self) -> TextKey {
        match self {
            ContactField::FullName => TextKey::Name,
            ContactField::Email => TextKey::Email,
            ContactField::Phone => TextKey::Phone,
            ContactField::Message => TextKey::Message,
        }
    }

    /// Inline message key for fields that carry a format rule.
    pub fn invalid_message(&self) -> Option<TextKey> {
        match self {
            ContactField::Email => Some(TextKey::InvalidEmail),
            ContactField::Phone => Some(TextKey::InvalidPhone),
            ContactField::FullName | ContactField::Message => None,
        }
    }

    /// Example value appended to the inline message.
    pub fn format_hint(&self) -> Option<&'static str> {
        match self {
            ContactField::Email => Some(EMAIL_FORMAT_HINT),
            ContactField::Phone => Some(PHONE_FORMAT_HINT),
            ContactField::FullName | ContactField::Message => None,
        }
    }

    /// HTML `type` for single-line inputs. `None` means a textarea.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ContactField::Email => Some("email"),
            ContactField::FullName | ContactField::Phone => Some("text"),
            ContactField::Message => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field name parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown contact field: {0:?}")]
    UnknownField(String),
}

impl FromStr for ContactField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// 2. Form Data
// -----------------------------------------------------------------------------

/// Contact submission owned by the component's parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.fullname,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Merge a change reported by the form back into the record.
    pub fn apply(&mut self, change: FieldChange) {
        let slot = match change.field {
            ContactField::FullName => &mut self.fullname,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = change.value;
    }
}

/// A single edit to one field, forwarded verbatim to the owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub field: ContactField,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: ContactField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Status Flags
// -----------------------------------------------------------------------------

/// Submission status supplied by the owner. Read-only to the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub loading: bool,
    pub error: bool,
    pub success: bool,
}

// -----------------------------------------------------------------------------
// 4. Snapshot
// -----------------------------------------------------------------------------

/// Everything the view needs to decide styling and visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub validity: FieldValidity,
    pub status: StatusFlags,
}

impl FormSnapshot {
    pub fn new(validity: FieldValidity, status: StatusFlags) -> Self {
        Self { validity, status }
    }

    pub fn submit_disabled(&self) -> bool {
        self.status.loading || self.validity.any_invalid()
    }

    /// Whether `field` gets the alert border.
    ///
    /// Full name and message have no format rule, so only the generic
    /// error flag reaches them.
    pub fn is_flagged(&self, field: ContactField) -> bool {
        self.validity.is_invalid(field) || self.status.error
    }

    /// Whether the inline format message under `field` is visible.
    pub fn shows_hint(&self, field: ContactField) -> bool {
        self.validity.is_invalid(field)
    }

    pub fn shows_success(&self) -> bool {
        self.status.success
    }

    pub fn shows_error(&self) -> bool {
        self.status.error
    }

    pub fn submit_label(&self) -> TextKey {
        if self.status.loading {
            TextKey::Sending
        } else {
            TextKey::Submit
        }
    }
}
