//! Folio Contact WASM
//!
//! WebAssembly bindings for the contact form validator.
//! The static build of the site loads this module so the browser rejects the
//! same submissions the server would.

use folio_contact as core;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Plain JS objects instead of `Map`, so callers can read `errors.name`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn form(name: Option<String>, email: Option<String>, message: Option<String>) -> core::ContactForm {
    core::ContactForm { name, email, message }
}

/// Validate the three contact fields
///
/// `undefined` or `null` values are treated as empty.
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateContact(name, email, message);
/// if (!result.isValid) {
///     showError('name', result.errors.name);
/// }
/// ```
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<JsValue, JsValue> {
    let result = core::validate(&form(name, email, message));
    if result.has_errors() {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "contact form rejected: {} field(s)",
            result.errors().len()
        )));
    }
    to_js(&result)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Build the `mailto:` link for a submission
///
/// Returns `undefined` when the submission does not validate, and throws when
/// `recipient` is not usable.
#[wasm_bindgen(js_name = composeMailto)]
pub fn compose_mailto_js(
    recipient: &str,
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<Option<String>, JsValue> {
    let contact = match core::accept(form(name, email, message)) {
        Ok(contact) => contact,
        Err(_) => return Ok(None),
    };
    core::compose_mailto(recipient, &contact)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("al@example.com"));
        assert!(!is_valid_email_js("a@b@c.com"));
    }

    #[wasm_bindgen_test]
    fn test_validate_contact_returns_plain_object() {
        let result = validate_contact(Some("A".into()), None, None).unwrap();

        let is_valid = js_sys::Reflect::get(&result, &JsValue::from_str("isValid")).unwrap();
        assert_eq!(is_valid.as_bool(), Some(false));

        let errors = js_sys::Reflect::get(&result, &JsValue::from_str("errors")).unwrap();
        let name = js_sys::Reflect::get(&errors, &JsValue::from_str("name")).unwrap();
        assert_eq!(
            name.as_string().as_deref(),
            Some("Name must be at least 2 characters")
        );
        let email = js_sys::Reflect::get(&errors, &JsValue::from_str("email")).unwrap();
        assert_eq!(
            email.as_string().as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[wasm_bindgen_test]
    fn test_compose_skips_invalid_submission() {
        let link = compose_mailto_js("me@example.com", Some("A".into()), None, None).unwrap();
        assert!(link.is_none());
    }

    #[wasm_bindgen_test]
    fn test_compose_valid_submission() {
        let link = compose_mailto_js(
            "me@example.com",
            Some("Al".into()),
            Some("al@example.com".into()),
            Some("Hello there friend".into()),
        )
        .unwrap()
        .unwrap();
        assert!(link.starts_with("mailto:me@example.com?subject="));
    }
}
