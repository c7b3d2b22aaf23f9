// File: src/page.rs
// Purpose: Compose the portfolio page from its sections

use crate::components::layout::{layout, Slots};
use crate::components::{contact, footer, hero, nav, projects, skills};
use crate::form_context::FormContext;
use crate::site::Site;
use maud::{html, Markup};

/// Route the server-mode contact form posts to
pub const CONTACT_ACTION: &str = "/contact";

/// How the contact form reaches the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Posted to the axum server and swapped in place by htmx
    Server,
    /// Validated in the browser by the WASM module at `wasm_module`
    Static { wasm_module: String },
}

/// Render the whole page
pub fn render_page(site: &Site, ctx: &FormContext, mode: &RenderMode) -> Markup {
    let content = html! {
        (nav::nav(&site.title))
        main {
            (hero::hero(&site.owner, &site.tagline, &site.links))
            (projects::projects(&site.projects))
            (skills::skills(&site.skills))
            (render_contact_section(site, ctx, mode))
        }
        (footer::footer(&site.owner, site.copyright_year))
    };

    let mut slots = Slots::new(format!("{} | {}", site.owner, site.title))
        .description(site.tagline.clone());
    if let RenderMode::Static { wasm_module } = mode {
        slots = slots.contact_module(wasm_module.clone());
    }

    layout(content, &slots)
}

/// Render only the contact section, for htmx swaps
pub fn render_contact_section(site: &Site, ctx: &FormContext, mode: &RenderMode) -> Markup {
    contact::contact(ctx, &site.contact_email, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::contact::ERROR_BANNER;
    use crate::site::Project;
    use folio_contact::{validate, ContactForm};

    fn site() -> Site {
        Site {
            owner: "Ada Lovelace".to_string(),
            projects: vec![Project::new("Engine", "Analytical", "https://github.com/ada/engine")],
            ..Site::default()
        }
    }

    #[test]
    fn test_sections_in_page_order() {
        let markup = render_page(&site(), &FormContext::empty(), &RenderMode::Server).into_string();

        let positions: Vec<usize> = [
            "aria-label=\"Main Navigation\"",
            "Ada Lovelace</h2>",
            "id=\"projects\"",
            "id=\"skills\"",
            "id=\"contact\"",
            "<footer",
        ]
        .iter()
        .map(|needle| markup.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(markup.contains("<title>Ada Lovelace | My Portfolio</title>"));
    }

    #[test]
    fn test_rejected_page_shows_errors() {
        let values = ContactForm::new("", "", "");
        let ctx = FormContext::rejected(values.clone(), validate(&values));
        let markup = render_page(&site(), &ctx, &RenderMode::Server).into_string();
        assert!(markup.contains(ERROR_BANNER));
    }

    #[test]
    fn test_static_page() {
        let mode = RenderMode::Static {
            wasm_module: "./pkg/folio_contact_wasm.js".to_string(),
        };
        let markup = render_page(&site(), &FormContext::empty(), &mode).into_string();
        assert!(markup.contains("data-contact-form"));
        assert!(markup.contains("./pkg/folio_contact_wasm.js"));
    }

    #[test]
    fn test_contact_section_alone() {
        let markup = render_contact_section(&site(), &FormContext::empty(), &RenderMode::Server)
            .into_string();
        assert!(markup.starts_with("<section id=\"contact\""));
        assert!(!markup.contains("<!DOCTYPE html>"));
    }
}
