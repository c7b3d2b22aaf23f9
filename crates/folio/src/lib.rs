// Folio - single-page portfolio site
// Maud components, TOML-driven content and a validated contact form

pub mod components;
pub mod config;
pub mod export;
pub mod form_context;
pub mod page;
pub mod response;
pub mod site;

// Re-export Maud for templates
pub use maud::{html, Markup};

// Re-export framework types
pub use config::Config;
pub use form_context::{FormContext, FormStatus};
pub use page::{render_contact_section, render_page, RenderMode};
pub use response::{ErrorResponse, OkResponse};
pub use site::{HeroLink, Project, Site};

// Re-export the contact core so callers need a single dependency
pub use folio_contact as contact;
