//! CSS framework configuration command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use beacon_style::{render_tailwind_config, StyleConfig};

use crate::config::load_config;

/// Run the style command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    json: bool,
    check: bool,
) -> Result<()> {
    let style = load_config(config_path)?.style;
    style.validate().context("Invalid style configuration")?;

    if check {
        tracing::info!(
            "Style configuration is valid ({} content globs, {} palettes, {} font families)",
            style.content.len(),
            style.colors.len(),
            style.font_family.len()
        );
        return Ok(());
    }

    let rendered = render(&style, json)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(style: &StyleConfig, json: bool) -> Result<String> {
    if json {
        Ok(format!("{}\n", style.to_json()?))
    } else {
        Ok(render_tailwind_config(style)?)
    }
}
