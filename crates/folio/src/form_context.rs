// File: src/form_context.rs
// Purpose: Contact form display state and the values to re-fill after a round trip

use folio_contact::{ContactForm, Field, ValidationResult};

/// What the contact section currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Fresh form, nothing submitted yet
    #[default]
    NoStatus,
    /// Last submission was rejected
    Error(ValidationResult),
    /// Last submission passed and was handed off
    Success,
}

impl FormStatus {
    /// Map a validation outcome onto the display state
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self::Success
        } else {
            Self::Error(result.clone())
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Context for the contact form: display status, submitted values and the
/// mail-client link once a submission is accepted
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    pub status: FormStatus,
    pub values: ContactForm,
    pub mailto: Option<String>,
}

impl FormContext {
    /// Create empty form context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rejected submission; keeps the values so the visitor can fix them
    pub fn rejected(values: ContactForm, result: ValidationResult) -> Self {
        Self {
            status: FormStatus::Error(result),
            values,
            mailto: None,
        }
    }

    /// Accepted submission; inputs are cleared and any previous errors dropped
    pub fn accepted(mailto: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Success,
            values: ContactForm::default(),
            mailto: Some(mailto.into()),
        }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: Field) -> bool {
        self.get_error(field).is_some()
    }

    /// Get error message for a field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        match &self.status {
            FormStatus::Error(result) => result.get_error(field),
            _ => None,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.status.is_error()
    }

    /// Get original value for a field
    pub fn get_value(&self, field: Field) -> &str {
        self.values.value(field)
    }
}
