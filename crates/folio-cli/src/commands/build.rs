use anyhow::Result;
use colored::Colorize;
use folio::export::export_static;
use folio::Config;
use std::path::{Path, PathBuf};

pub fn execute(config_path: &Path, out: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let out_dir = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.build.output_dir));

    println!("{}", "Building static site...".green().bold());
    let index = export_static(&config, &out_dir)?;

    println!("{} {}", "✓ Wrote".green().bold(), index.display());
    println!(
        "Serve the contact validator at {} (wasm-pack build crates/folio-contact-wasm --target web)",
        config.build.wasm_module.cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_uses_config_content() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("folio.toml");
        fs::write(&config, "[site]\nowner = \"Ada Lovelace\"\n").unwrap();
        let out = dir.path().join("site");

        execute(&config, Some(&out)).unwrap();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("Ada Lovelace"));
    }
}
