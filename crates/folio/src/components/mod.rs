// Page building blocks. Each component is a plain function returning Markup.

pub mod card;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod projects;
pub mod skills;

/// Brand colour used for text, borders and the header background
pub const BRAND: &str = "#0D324D";

/// Join base classes with an optional caller-supplied class
pub(crate) fn classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_merge() {
        assert_eq!(classes("p-6", ""), "p-6");
        assert_eq!(classes("p-6", "  pt-0 "), "p-6 pt-0");
    }
}
