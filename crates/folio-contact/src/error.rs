use crate::field::Field;
use thiserror::Error;

/// A contact field that failed its rule
///
/// The only validation error kind. Missing and malformed input collapse into
/// the same fixed message for the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldInvalid {
    pub field: Field,
    pub message: String,
}

impl FieldInvalid {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            message: field.error_message().to_string(),
        }
    }
}

/// Input that cannot be turned into a `mailto:` link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("recipient address is empty")]
    EmptyRecipient,

    #[error("recipient address is not a valid email: {0}")]
    InvalidRecipient(String),
}
