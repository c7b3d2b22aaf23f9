//! Folio Contact
//!
//! Pure validation for the portfolio contact form, plus the `mailto:` handoff
//! built from a validated submission. Shared by the server and the WASM
//! client-side bindings so both reject exactly the same input.

pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod mailto;

// Re-export all validators
pub use email::*;
pub use error::{ComposeError, FieldInvalid};
pub use field::Field;
pub use form::{accept, validate, ContactForm, ValidContact, ValidationResult};
pub use mailto::compose_mailto;
