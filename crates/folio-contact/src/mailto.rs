//! `mailto:` handoff for accepted contact submissions

use crate::email::is_valid_email;
use crate::error::ComposeError;
use crate::form::ValidContact;

/// Build a `mailto:` URI that opens a pre-filled draft to `recipient`
///
/// Subject and body are percent-encoded, so visitor text containing `&`, `#`,
/// `%` or line breaks stays inside its parameter.
pub fn compose_mailto(recipient: &str, contact: &ValidContact) -> Result<String, ComposeError> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ComposeError::EmptyRecipient);
    }
    if !is_valid_email(recipient) {
        return Err(ComposeError::InvalidRecipient(recipient.to_string()));
    }

    let subject = format!("Portfolio Contact from {}", contact.name());
    let body = format!(
        "From: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
        contact.name(),
        contact.email(),
        contact.message()
    );

    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{accept, ContactForm};
    use pretty_assertions::assert_eq;

    fn contact(name: &str, email: &str, message: &str) -> ValidContact {
        accept(ContactForm::new(name, email, message)).unwrap()
    }

    #[test]
    fn test_compose_basic_link() {
        let link = compose_mailto("me@example.com", &contact("Al", "al@example.com", "Hello there friend")).unwrap();
        assert_eq!(
            link,
            "mailto:me@example.com?subject=Portfolio%20Contact%20from%20Al\
             &body=From%3A%20Al%0D%0AEmail%3A%20al%40example.com%0D%0A%0D%0AMessage%3A%0D%0AHello%20there%20friend"
        );
    }

    #[test]
    fn test_body_round_trips_through_decoding() {
        let message = "Rates & dates?\nReply #1 at 100%";
        let link = compose_mailto("me@example.com", &contact("Jo", "jo@x.io", message)).unwrap();

        let body = link.split("&body=").nth(1).unwrap();
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(
            decoded,
            format!("From: Jo\r\nEmail: jo@x.io\r\n\r\nMessage:\r\n{}", message)
        );
        assert_eq!(link.matches('&').count(), 1);
        assert!(!link.contains('#'));
    }

    #[test]
    fn test_rejects_bad_recipient() {
        let valid = contact("Al", "al@example.com", "Hello there friend");
        assert_eq!(compose_mailto("  ", &valid), Err(ComposeError::EmptyRecipient));
        assert_eq!(
            compose_mailto("nobody", &valid),
            Err(ComposeError::InvalidRecipient("nobody".to_string()))
        );
    }
}
