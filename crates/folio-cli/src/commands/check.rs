use anyhow::Result;
use colored::Colorize;
use folio::contact::{validate, ContactForm, ValidationResult};

fn report(result: &ValidationResult) -> String {
    if result.is_valid() {
        return format!("{}", "✓ Submission is valid".green().bold());
    }
    let mut lines = vec![format!("{}", "✗ Submission rejected".red().bold())];
    for error in result.field_errors() {
        lines.push(format!("  {}: {}", error.field.to_string().yellow(), error.message));
    }
    lines.join("\n")
}

/// Validate `form` and print the outcome; returns whether it passed
pub fn execute(form: &ContactForm, json: bool) -> Result<bool> {
    let result = validate(form);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report(&result));
    }
    Ok(result.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_fields_in_order() {
        colored::control::set_override(false);
        let result = validate(&ContactForm::new("A", "bad-email", "short"));
        assert_eq!(
            report(&result),
            "✗ Submission rejected\n  \
             name: Name must be at least 2 characters\n  \
             email: Please enter a valid email address\n  \
             message: Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_execute_returns_validity() {
        assert!(execute(&ContactForm::new("Al", "al@example.com", "Hello there friend"), true).unwrap());
        assert!(!execute(&ContactForm::default(), false).unwrap());
    }
}
