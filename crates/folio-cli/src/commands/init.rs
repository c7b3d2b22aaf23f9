use anyhow::{bail, Context, Result};
use colored::Colorize;
use folio::Config;
use std::fs;
use std::path::Path;

/// Write the default configuration to `path`
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let content = Config::default().to_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "✓ Created".green().bold(), path.display());
    println!("Edit the [site] table, then run {}", "folio build".cyan());
    Ok(())
}
