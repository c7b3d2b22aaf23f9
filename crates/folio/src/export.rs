// File: src/export.rs
// Purpose: Static site generation - write the page to an output directory

use crate::config::Config;
use crate::form_context::FormContext;
use crate::page::{render_page, RenderMode};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render the static page and write `<out_dir>/index.html`
///
/// Returns the path of the written file. The WASM package is not built here;
/// it must be served from `config.build.wasm_module`.
pub fn export_static(config: &Config, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mode = RenderMode::Static {
        wasm_module: config.build.wasm_module.clone(),
    };
    let markup = render_page(&config.site, &FormContext::empty(), &mode);

    let index = out_dir.join("index.html");
    fs::write(&index, markup.into_string())
        .with_context(|| format!("Failed to write {:?}", index))?;

    tracing::info!(path = ?index, "exported static page");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let index = export_static(&Config::default(), &out).unwrap();

        assert_eq!(index, out.join("index.html"));
        let html = fs::read_to_string(index).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("data-contact-form"));
        assert!(html.contains("/pkg/folio_contact_wasm.js"));
    }

    #[test]
    fn test_export_overwrites_previous_build() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "stale").unwrap();

        export_static(&Config::default(), dir.path()).unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!html.contains("stale"));
    }
}
