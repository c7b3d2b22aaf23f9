//! Contact section: the form, its status banner and per-field errors.

use crate::form_context::{FormContext, FormStatus};
use crate::page::{RenderMode, CONTACT_ACTION};
use folio_contact::Field;
use maud::{html, Markup};

pub const ERROR_BANNER: &str = "Please correct the errors below.";
pub const SUCCESS_BANNER: &str = "Your message has been sent successfully!";

fn input_class(ctx: &FormContext, field: Field) -> String {
    let border = if ctx.has_error(field) {
        "border-red-500"
    } else {
        "border-[#0D324D]"
    };
    format!("w-full px-4 py-2 border {} rounded-lg focus:outline-none", border)
}

fn field_error(ctx: &FormContext, field: Field) -> Markup {
    html! {
        @if let Some(message) = ctx.get_error(field) {
            p class="text-red-500 text-sm mt-1" data-error-for=(field.as_str()) { (message) }
        }
    }
}

fn status_banner(status: &FormStatus) -> Markup {
    html! {
        @match status {
            FormStatus::Error(_) => {
                div class="text-red-500 text-center" role="alert" data-status="error" {
                    p { (ERROR_BANNER) }
                }
            }
            FormStatus::Success => {
                div class="text-green-500 text-center" role="status" data-status="success" {
                    p { (SUCCESS_BANNER) }
                }
            }
            FormStatus::NoStatus => {}
        }
    }
}

fn fields(ctx: &FormContext) -> Markup {
    html! {
        div {
            input type="text" name="name" placeholder="Your Name"
                class=(input_class(ctx, Field::Name))
                value=(ctx.get_value(Field::Name))
                aria-label="Enter your name" required;
            (field_error(ctx, Field::Name))
        }
        div {
            input type="email" name="email" placeholder="Your Email"
                class=(input_class(ctx, Field::Email))
                value=(ctx.get_value(Field::Email))
                aria-label="Enter your email" required;
            (field_error(ctx, Field::Email))
        }
        div {
            textarea name="message" placeholder="Your Message" rows="4"
                class=(input_class(ctx, Field::Message))
                aria-label="Enter your message" required {
                (ctx.get_value(Field::Message))
            }
            (field_error(ctx, Field::Message))
        }
        button type="submit"
            class="w-full bg-[#0D324D] text-white py-3 rounded-lg shadow-lg hover:bg-[#0b283d] transition-all"
            aria-label="Submit your message" {
            "Send Message"
        }
    }
}

/// Contact section, swapped in place on htmx submissions
pub fn contact(ctx: &FormContext, contact_email: &str, mode: &RenderMode) -> Markup {
    let body = html! {
        (status_banner(&ctx.status))
        (fields(ctx))
    };

    html! {
        section id="contact" class="py-20 bg-white" {
            h2 class="text-4xl font-bold text-center text-[#0D324D] mb-6" { "Contact" }
            @match mode {
                RenderMode::Server => {
                    form method="post" action=(CONTACT_ACTION)
                        hx-post=(CONTACT_ACTION) hx-target="#contact" hx-swap="outerHTML"
                        class="max-w-lg mx-auto space-y-6" {
                        (body)
                    }
                }
                RenderMode::Static { .. } => {
                    form data-contact-form data-recipient=(contact_email)
                        class="max-w-lg mx-auto space-y-6" {
                        (body)
                    }
                }
            }
            @if let Some(link) = &ctx.mailto {
                p class="text-center mt-4" {
                    a href=(link) class="underline text-[#0D324D]" data-mailto { "Open your email client" }
                }
            }
            p class="text-center mt-4 text-[#0D324D]" {
                "You can also reach out to me at: "
                a href={ "mailto:" (contact_email) } class="underline" { (contact_email) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_contact::{validate, ContactForm};

    fn render(ctx: &FormContext) -> String {
        contact(ctx, "me@example.com", &RenderMode::Server).into_string()
    }

    #[test]
    fn test_fresh_form_has_no_banner() {
        let markup = render(&FormContext::empty());
        assert!(!markup.contains(ERROR_BANNER));
        assert!(!markup.contains(SUCCESS_BANNER));
        assert!(!markup.contains("data-error-for"));
        assert!(markup.contains(r#"hx-post="/contact""#));
        assert!(markup.contains(r#"href="mailto:me@example.com""#));
    }

    #[test]
    fn test_errors_render_under_fields() {
        let values = ContactForm::new("A", "bad-email", "short");
        let ctx = FormContext::rejected(values.clone(), validate(&values));
        let markup = render(&ctx);

        assert!(markup.contains(ERROR_BANNER));
        assert!(markup.contains("Name must be at least 2 characters"));
        assert!(markup.contains("Please enter a valid email address"));
        assert!(markup.contains("Message must be at least 10 characters"));
        assert_eq!(markup.matches("border-red-500").count(), 3);
        // Values survive the round trip
        assert!(markup.contains(r#"value="bad-email""#));
        assert!(markup.contains(">short</textarea>"));
    }

    #[test]
    fn test_only_failing_field_is_flagged() {
        let values = ContactForm::new("Al", "al@example.com", "short");
        let ctx = FormContext::rejected(values.clone(), validate(&values));
        let markup = render(&ctx);

        assert_eq!(markup.matches("border-red-500").count(), 1);
        assert!(markup.contains(r#"data-error-for="message""#));
    }

    #[test]
    fn test_success_shows_banner_and_link() {
        let ctx = FormContext::accepted("mailto:me@example.com?subject=Hi");
        let markup = render(&ctx);

        assert!(markup.contains(SUCCESS_BANNER));
        assert!(!markup.contains(ERROR_BANNER));
        assert!(markup.contains(r#"href="mailto:me@example.com?subject=Hi""#));
    }

    #[test]
    fn test_static_mode_form() {
        let mode = RenderMode::Static {
            wasm_module: "/pkg/folio_contact_wasm.js".to_string(),
        };
        let markup = contact(&FormContext::empty(), "me@example.com", &mode).into_string();
        assert!(markup.contains("data-contact-form"));
        assert!(markup.contains(r#"data-recipient="me@example.com""#));
        assert!(!markup.contains("hx-post"));
    }

    #[test]
    fn test_submitted_values_are_escaped() {
        let values = ContactForm::new("\"><script>", "x", "</textarea><b>");
        let ctx = FormContext::rejected(values.clone(), validate(&values));
        let markup = render(&ctx);
        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("</textarea><b>"));
    }
}
