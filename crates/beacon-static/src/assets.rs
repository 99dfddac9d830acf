//! Asset loading and CSS processing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

/// Locations of the four build inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Compiled stylesheet produced by the CSS framework
    pub stylesheet: PathBuf,

    /// First Markdown document (product requirements)
    pub primary: PathBuf,

    /// Second Markdown document (implementation plan)
    pub secondary: PathBuf,

    /// HTML shell containing the link tag and placeholders
    pub shell: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from("docs/output.css"),
            primary: PathBuf::from("specs/prd.md"),
            secondary: PathBuf::from("specs/2026-01-19-landing-page-sdd-spec.md"),
            shell: PathBuf::from("src/index.html"),
        }
    }
}

/// Raw text of every build input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub stylesheet: String,
    pub primary: String,
    pub secondary: String,
    pub shell: String,
}

/// Reads build inputs from disk.
pub struct AssetLoader;

impl AssetLoader {
    /// Load all inputs in order: stylesheet, primary, secondary, shell.
    ///
    /// Stops at the first file that cannot be read as UTF-8 text.
    pub fn load(paths: &SourcePaths) -> Result<Sources, BuildError> {
        Ok(Sources {
            stylesheet: read_text(&paths.stylesheet)?,
            primary: read_text(&paths.primary)?,
            secondary: read_text(&paths.secondary)?,
            shell: read_text(&paths.shell)?,
        })
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, BuildError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| BuildError::Minify(format!("CSS parse error: {}", e)))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| BuildError::Minify(format!("CSS print error: {}", e)))?;

        Ok(minified.code)
    }
}

fn read_text(path: &Path) -> Result<String, BuildError> {
    tracing::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}
