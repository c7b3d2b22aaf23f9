// Document layout
// Wraps the page sections in a full HTML document

use super::contact::{ERROR_BANNER, SUCCESS_BANNER};
use super::BRAND;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const HTMX_CDN: &str = "https://unpkg.com/htmx.org@1.9.10";

/// Browser side of the static build: validates with the WASM module and opens
/// the mail client. Settings come from the `folio-contact-config` JSON block.
const CONTACT_SCRIPT: &str = r#"
const cfg = JSON.parse(document.getElementById("folio-contact-config").textContent);
const wasm = await import(cfg.module);
await wasm.default();
const form = document.querySelector("[data-contact-form]");
const banner = (kind, text) => {
  const div = document.createElement("div");
  div.className = kind === "error" ? "text-red-500 text-center" : "text-green-500 text-center";
  div.dataset.status = kind;
  div.textContent = text;
  form.prepend(div);
};
form?.addEventListener("submit", (event) => {
  event.preventDefault();
  const data = new FormData(form);
  const [name, email, message] = ["name", "email", "message"].map((f) => data.get(f));
  form.querySelectorAll("[data-error-for],[data-status]").forEach((el) => el.remove());
  const result = wasm.validateContact(name, email, message);
  for (const field of ["name", "email", "message"]) {
    const input = form.elements.namedItem(field);
    const error = result.errors[field];
    input.classList.toggle("border-red-500", Boolean(error));
    input.classList.toggle("border-[#0D324D]", !error);
    if (error) {
      const p = document.createElement("p");
      p.className = "text-red-500 text-sm mt-1";
      p.dataset.errorFor = field;
      p.textContent = error;
      input.after(p);
    }
  }
  if (!result.isValid) {
    banner("error", cfg.errorBanner);
    return;
  }
  const link = wasm.composeMailto(form.dataset.recipient, name, email, message);
  window.location.href = link;
  banner("success", cfg.successBanner);
  form.reset();
});
"#;

/// Slots for the document layout
#[derive(Clone, Default)]
pub struct Slots {
    /// Page title
    pub title: String,

    /// Meta description
    pub description: Option<String>,

    /// WASM module to load for client-side contact validation
    pub contact_module: Option<String>,
}

impl Slots {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder method to set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder method to enable the client-side contact script
    pub fn contact_module(mut self, module: impl Into<String>) -> Self {
        self.contact_module = Some(module.into());
        self
    }
}

// JSON placed inside <script> must not be able to close the tag.
fn script_json(value: &serde_json::Value) -> PreEscaped<String> {
    PreEscaped(value.to_string().replace('<', "\\u003c"))
}

fn contact_script(module: &str) -> Markup {
    let config = serde_json::json!({
        "module": module,
        "errorBanner": ERROR_BANNER,
        "successBanner": SUCCESS_BANNER,
    });
    html! {
        script type="application/json" id="folio-contact-config" { (script_json(&config)) }
        script type="module" { (PreEscaped(CONTACT_SCRIPT)) }
    }
}

/// Wrap page content in a full HTML document
pub fn layout(content: Markup, slots: &Slots) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="theme-color" content=(BRAND);
                title { (slots.title) }
                @if let Some(description) = &slots.description {
                    meta name="description" content=(description);
                }
                script src=(TAILWIND_CDN) {}
                @if slots.contact_module.is_none() {
                    script src=(HTMX_CDN) {}
                }
            }
            body class="min-h-screen bg-[#f2f2f2]" {
                (content)
                @if let Some(module) = &slots.contact_module {
                    (contact_script(module))
                }
            }
        }
    }
}
