//! Initialize a landing page project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use beacon_static::Targets;

use crate::config::load_config;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing beacon...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let config = load_config(config_path)?;
    let shell_path = &config.paths.shell;

    if !shell_path.exists() || yes {
        if let Some(parent) = shell_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let targets = config.build_config().targets;
        fs::write(shell_path, default_shell(&targets))
            .with_context(|| format!("Failed to write {}", shell_path.display()))?;
        tracing::info!("Created {}", shell_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            shell_path.display()
        );
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'beacon build' to assemble the page.");

    Ok(())
}

/// HTML shell containing the stylesheet link and both placeholders.
fn default_shell(targets: &Targets) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Landing Page</title>
  {link}
</head>
<body class="bg-dark-900 text-slate-100">
  <main class="mx-auto max-w-4xl p-8">
    <section id="prd">
      <h2 class="text-neon-blue">Product Requirements</h2>
      <pre class="font-mono whitespace-pre-wrap">{primary}</pre>
    </section>
    <section id="plan">
      <h2 class="text-neon-purple">Implementation Plan</h2>
      <pre class="font-mono whitespace-pre-wrap">{secondary}</pre>
    </section>
  </main>
</body>
</html>
"#,
        link = targets.stylesheet_link,
        primary = targets.primary_placeholder,
        secondary = targets.secondary_placeholder,
    )
}

const DEFAULT_CONFIG: &str = r##"# Beacon Configuration

[paths]
# Compiled stylesheet from the CSS framework
stylesheet = "docs/output.css"

# Markdown documents inlined into the page
primary = "specs/prd.md"
secondary = "specs/2026-01-19-landing-page-sdd-spec.md"

# HTML shell and final page
shell = "src/index.html"
output = "docs/index.html"

[template]
stylesheet_link = '<link rel="stylesheet" href="output.css">'
primary_placeholder = "<!-- PRD_CONTENT_PLACEHOLDER -->"
secondary_placeholder = "<!-- PLANO_CONTENT_PLACEHOLDER -->"

[build]
# Minify the stylesheet before inlining
minify = false

# Fail if the shell is missing the link tag or a placeholder
strict = false
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_static::{assemble, Sources};

    #[test]
    fn default_shell_has_every_target_once() {
        let targets = Targets::default();
        let shell = default_shell(&targets);

        for needle in [
            &targets.stylesheet_link,
            &targets.primary_placeholder,
            &targets.secondary_placeholder,
        ] {
            assert_eq!(shell.matches(needle.as_str()).count(), 1, "{needle}");
        }
    }

    #[test]
    fn default_shell_assembles_cleanly() {
        let targets = Targets::default();
        let sources = Sources {
            shell: default_shell(&targets),
            ..Default::default()
        };

        assert!(assemble(&sources, &targets).missing.is_empty());
    }

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.build_config().targets, Targets::default());
        assert_eq!(
            config.build_config().sources,
            beacon_static::SourcePaths::default()
        );
    }

    #[tokio::test]
    async fn writes_config_and_shell() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("beacon.toml");
        let shell_path = temp.path().join("site").join("index.html");
        fs::write(
            &config_path,
            format!("[paths]\nshell = {:?}\n", shell_path.display().to_string()),
        )
        .unwrap();

        run(&config_path, false).await.unwrap();

        let config = fs::read_to_string(&config_path).unwrap();
        assert!(config.starts_with("[paths]"));
        assert!(fs::read_to_string(&shell_path)
            .unwrap()
            .contains("<!-- PRD_CONTENT_PLACEHOLDER -->"));
    }
}
