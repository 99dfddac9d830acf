//! Single-page builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assembler::{assemble, Target, Targets};
use crate::assets::{AssetLoader, SourcePaths};

/// Configuration for building the page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Input file locations
    pub sources: SourcePaths,

    /// Output HTML file
    pub output: PathBuf,

    /// Strings replaced in the shell
    pub targets: Targets,

    /// Minify the stylesheet before inlining
    pub minify: bool,

    /// Fail when a substitution target is absent from the shell
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sources: SourcePaths::default(),
            output: PathBuf::from("docs/index.html"),
            targets: Targets::default(),
            minify: false,
            strict: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Written file
    pub output: PathBuf,

    /// Size of the written document in bytes
    pub bytes: usize,

    /// Targets that were not found in the shell
    pub missing: Vec<Target>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BuildResult {
    /// Output size in kilobytes, rounded to the nearest whole number.
    pub fn size_kb(&self) -> u64 {
        size_kb(self.bytes)
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to minify stylesheet: {0}")]
    Minify(String),

    #[error("Shell {} has no {target}", shell.display())]
    MissingTarget { shell: PathBuf, target: Target },
}

/// Builds one self-contained HTML page.
pub struct StaticBuilder {
    config: BuildConfig,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Load inputs, assemble the page and write it.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let mut sources = AssetLoader::load(&self.config.sources)?;

        if self.config.minify {
            sources.stylesheet = AssetLoader::minify_css(&sources.stylesheet)?;
        }

        let assembly = assemble(&sources, &self.config.targets);

        if self.config.strict {
            if let Some(&target) = assembly.missing.first() {
                return Err(BuildError::MissingTarget {
                    shell: self.config.sources.shell.clone(),
                    target,
                });
            }
        }

        let bytes = emit(&self.config.output, &assembly.html)?;

        Ok(BuildResult {
            output: self.config.output.clone(),
            bytes,
            missing: assembly.missing,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Write the document, replacing any existing file. Returns the byte count.
fn emit(path: &Path, html: &str) -> Result<usize, BuildError> {
    fs::write(path, html).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(html.len())
}

/// Convert a byte count to kilobytes, rounding halves up.
pub fn size_kb(bytes: usize) -> u64 {
    ((bytes as u64) + 512) / 1024
}
