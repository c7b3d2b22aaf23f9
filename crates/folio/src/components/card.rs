//! Card primitives: a bordered white panel with optional header, title and content.

use super::classes;
use maud::{html, Markup};

pub fn card(class: &str, body: Markup) -> Markup {
    html! {
        div class=(classes("rounded-lg border bg-white text-gray-800 shadow-md", class)) {
            (body)
        }
    }
}

pub fn card_header(class: &str, body: Markup) -> Markup {
    html! {
        div class=(classes("flex flex-col space-y-2 p-6", class)) { (body) }
    }
}

pub fn card_title(class: &str, title: &str) -> Markup {
    html! {
        h3 class=(classes("text-2xl font-semibold leading-tight tracking-tight", class)) { (title) }
    }
}

pub fn card_content(class: &str, body: Markup) -> Markup {
    html! {
        div class=(classes("p-6 pt-0", class)) { (body) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_nesting_and_classes() {
        let markup = card(
            "hover:shadow-xl",
            html! {
                (card_header("", card_title("text-brand", "Title")))
                (card_content("", html! { p { "Body" } }))
            },
        )
        .into_string();

        assert!(markup.starts_with(
            r#"<div class="rounded-lg border bg-white text-gray-800 shadow-md hover:shadow-xl">"#
        ));
        assert!(markup.contains(r#"<h3 class="text-2xl font-semibold leading-tight tracking-tight text-brand">Title</h3>"#));
        assert!(markup.contains(r#"<div class="p-6 pt-0"><p>Body</p></div>"#));
    }
}
