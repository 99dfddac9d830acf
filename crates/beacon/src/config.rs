//! Configuration file structure (beacon.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use beacon_static::{BuildConfig, SourcePaths, Targets};
use beacon_style::StyleConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub stylesheet: PathBuf,
    pub primary: PathBuf,
    pub secondary: PathBuf,
    pub shell: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let sources = SourcePaths::default();
        Self {
            stylesheet: sources.stylesheet,
            primary: sources.primary,
            secondary: sources.secondary,
            shell: sources.shell,
            output: BuildConfig::default().output,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub stylesheet_link: String,
    pub primary_placeholder: String,
    pub secondary_placeholder: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let targets = Targets::default();
        Self {
            stylesheet_link: targets.stylesheet_link,
            primary_placeholder: targets.primary_placeholder,
            secondary_placeholder: targets.secondary_placeholder,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSettings {
    #[serde(default)]
    pub minify: bool,
    #[serde(default)]
    pub strict: bool,
}

impl TemplateConfig {
    /// Reject empty targets; they would never match in the shell.
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("stylesheet_link", &self.stylesheet_link),
            ("primary_placeholder", &self.primary_placeholder),
            ("secondary_placeholder", &self.secondary_placeholder),
        ] {
            if value.is_empty() {
                bail!("[template].{} must not be empty", key);
            }
        }
        Ok(())
    }
}

impl ConfigFile {
    /// Translate into a builder config. CLI overrides are applied by the caller.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            sources: SourcePaths {
                stylesheet: self.paths.stylesheet.clone(),
                primary: self.paths.primary.clone(),
                secondary: self.paths.secondary.clone(),
                shell: self.paths.shell.clone(),
            },
            output: self.paths.output.clone(),
            targets: Targets {
                stylesheet_link: self.template.stylesheet_link.clone(),
                primary_placeholder: self.template.primary_placeholder.clone(),
                secondary_placeholder: self.template.secondary_placeholder.clone(),
            },
            minify: self.build.minify,
            strict: self.build.strict,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .template
        .validate()
        .with_context(|| format!("Invalid {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("beacon.toml")).unwrap();
        let build = config.build_config();

        assert_eq!(build.sources, SourcePaths::default());
        assert_eq!(build.output, PathBuf::from("docs/index.html"));
        assert_eq!(build.targets, Targets::default());
        assert!(!build.minify);
        assert!(!build.strict);
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("beacon.toml");
        fs::write(
            &path,
            r#"
[paths]
output = "public/index.html"

[template]
primary_placeholder = "<!-- REQUIREMENTS -->"

[build]
strict = true

[style]
content = ["./site/**/*.html"]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let build = config.build_config();

        assert_eq!(build.output, PathBuf::from("public/index.html"));
        assert_eq!(build.sources.shell, PathBuf::from("src/index.html"));
        assert_eq!(build.targets.primary_placeholder, "<!-- REQUIREMENTS -->");
        assert_eq!(
            build.targets.secondary_placeholder,
            "<!-- PLANO_CONTENT_PLACEHOLDER -->"
        );
        assert!(build.strict);
        assert!(!build.minify);
        assert!(config.style.content.contains("./site/**/*.html"));
        assert_eq!(config.style.colors, StyleConfig::default().colors);
    }

    #[test]
    fn style_palette_override() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("beacon.toml");
        fs::write(
            &path,
            r##"
[style.colors.neon]
blue = "#2563eb"

[style.font_family]
mono = ["JetBrains Mono", "monospace"]
"##,
        )
        .unwrap();

        let style = load_config(&path).unwrap().style;

        assert_eq!(style.colors["neon"]["blue"], "#2563eb");
        assert_eq!(style.colors["neon"]["cyan"], "#06b6d4");
        assert_eq!(style.colors["dark"]["900"], "#0f172a");
        assert_eq!(style.font_family["mono"], vec!["JetBrains Mono", "monospace"]);
    }

    #[test]
    fn empty_template_target_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("beacon.toml");
        fs::write(&path, "[template]\nprimary_placeholder = \"\"\n").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(format!("{err:#}").contains("[template].primary_placeholder must not be empty"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("beacon.toml");
        fs::write(&path, "[build\nminify = true").unwrap();

        assert!(load_config(&path).is_err());
    }
}
