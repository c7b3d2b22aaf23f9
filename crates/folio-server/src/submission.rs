// File: src/submission.rs
// Purpose: Decode a contact submission body and read what the client wants back

use axum::http::HeaderMap;
use folio::contact::ContactForm;
use serde_json::Value as JsonValue;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

/// Check if request accepts JSON
pub fn accepts_json(headers: &HeaderMap) -> bool {
    header(headers, "accept")
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// Check if this is an htmx request
pub fn is_htmx(headers: &HeaderMap) -> bool {
    header(headers, "hx-request").is_some()
}

// `+` is a space in form encoding; a literal plus arrives as %2B.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Parse `application/x-www-form-urlencoded` fields; the first occurrence of a key wins
fn parse_urlencoded(body: &[u8]) -> ContactForm {
    let body = String::from_utf8_lossy(body);
    let mut form = ContactForm::default();

    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match decode_component(key).as_str() {
            "name" => &mut form.name,
            "email" => &mut form.email,
            "message" => &mut form.message,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_component(value));
        }
    }

    form
}

/// Fields that are not strings are treated as missing
fn parse_json(body: &[u8]) -> ContactForm {
    let value: JsonValue = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable JSON contact body");
            return ContactForm::default();
        }
    };
    let text = |key: &str| value.get(key).and_then(JsonValue::as_str).map(str::to_string);

    ContactForm {
        name: text("name"),
        email: text("email"),
        message: text("message"),
    }
}

/// Decode a contact submission according to its content type
///
/// Unknown or missing content types decode to an empty form, which then fails
/// validation on every field.
pub fn parse_contact_form(headers: &HeaderMap, body: &[u8]) -> ContactForm {
    match header(headers, "content-type") {
        Some(ct) if ct.contains("application/json") => parse_json(body),
        Some(ct) if ct.contains("application/x-www-form-urlencoded") => parse_urlencoded(body),
        _ => ContactForm::default(),
    }
}
