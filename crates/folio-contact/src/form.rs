//! Contact form validation

use crate::email::is_valid_email;
use crate::error::FieldInvalid;
use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const NAME_MIN_LENGTH: usize = 2;
const MESSAGE_MIN_LENGTH: usize = 10;

/// Raw values submitted through the contact form
///
/// Any field may be missing; a missing field validates the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Create a form with all three fields present
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Raw value of a field, empty when missing
    pub fn value(&self, field: Field) -> &str {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        };
        value.as_deref().unwrap_or("")
    }
}

/// Outcome of validating a contact form
///
/// `is_valid` is derived from `errors` at construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::from_errors(BTreeMap::new())
    }

    /// Build a result from collected field errors
    pub fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Field errors keyed by field
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Iterate errors in form order
    pub fn field_errors(&self) -> impl Iterator<Item = FieldInvalid> + '_ {
        self.errors.iter().map(|(field, message)| FieldInvalid {
            field: *field,
            message: message.clone(),
        })
    }

    /// Convert to a `Result`, collecting errors in form order
    pub fn into_result(self) -> Result<(), Vec<FieldInvalid>> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self
                .errors
                .into_iter()
                .map(|(field, message)| FieldInvalid { field, message })
                .collect())
        }
    }
}

/// A contact submission whose fields all passed validation
///
/// Only produced by [`accept`], so holding one proves the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidContact {
    name: String,
    email: String,
    message: String,
}

impl ValidContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// Length in UTF-16 code units, matching what a browser reports for an input value.
fn code_units(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check(field: Field, value: &str) -> Result<(), FieldInvalid> {
    let ok = match field {
        Field::Name => code_units(value) >= NAME_MIN_LENGTH,
        Field::Email => is_valid_email(value),
        Field::Message => code_units(value) >= MESSAGE_MIN_LENGTH,
    };
    if ok {
        Ok(())
    } else {
        Err(FieldInvalid::new(field))
    }
}

/// Validate all three fields of a contact submission
///
/// Every field is checked; no check short-circuits another. Values are not
/// trimmed, so whitespace counts toward length.
pub fn validate(form: &ContactForm) -> ValidationResult {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| check(field, form.value(field)).err())
        .map(|invalid| (invalid.field, invalid.message))
        .collect();

    ValidationResult::from_errors(errors)
}

/// Validate a submission and, when clean, hand back its values as a `ValidContact`
pub fn accept(form: ContactForm) -> Result<ValidContact, ValidationResult> {
    let result = validate(&form);
    if !result.is_valid() {
        return Err(result);
    }

    Ok(ValidContact {
        name: form.name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        message: form.message.unwrap_or_default(),
    })
}
