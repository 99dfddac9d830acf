//! Page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use beacon_static::{BuildResult, StaticBuilder};

use crate::config::load_config;

/// Run the build command.
///
/// `strict` and `minify` only ever switch their setting on; the config file
/// decides otherwise.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    strict: bool,
    minify: bool,
) -> Result<()> {
    let file_config = load_config(config_path)?;

    let mut config = file_config.build_config();
    if let Some(output) = output {
        config.output = output;
    }
    config.strict |= strict;
    config.minify |= minify;

    tracing::debug!(
        "Building {} from {}",
        config.output.display(),
        config.sources.shell.display()
    );

    let result = StaticBuilder::new(config).build()?;

    for target in &result.missing {
        tracing::debug!("Skipped {}: not present in shell", target);
    }
    tracing::debug!("Build finished in {}ms", result.duration_ms);

    print!("{}", summary(&result));

    Ok(())
}

/// Console report for a finished build.
fn summary(result: &BuildResult) -> String {
    format!(
        "Final build complete!\nFile: {}\nSize: {} KB\n",
        result.output.display(),
        result.size_kb()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SHELL: &str = r#"<html><head><link rel="stylesheet" href="output.css"></head><body><!-- PRD_CONTENT_PLACEHOLDER --><!-- PLANO_CONTENT_PLACEHOLDER --></body></html>"#;

    /// Write inputs and a beacon.toml pointing at them. Returns the config path.
    fn project(root: &Path, shell: &str, extra: &str) -> PathBuf {
        fs::write(root.join("output.css"), "body{color:red}").unwrap();
        fs::write(root.join("prd.md"), "A & B").unwrap();
        fs::write(root.join("plan.md"), "<x>").unwrap();
        fs::write(root.join("index.html"), shell).unwrap();

        let path = |name: &str| format!("{:?}", root.join(name).display().to_string());
        let config = format!(
            "[paths]\nstylesheet = {}\nprimary = {}\nsecondary = {}\nshell = {}\noutput = {}\n{}",
            path("output.css"),
            path("prd.md"),
            path("plan.md"),
            path("index.html"),
            path("configured.html"),
            extra
        );
        let config_path = root.join("beacon.toml");
        fs::write(&config_path, config).unwrap();
        config_path
    }

    #[test]
    fn summary_lines() {
        let result = BuildResult {
            output: PathBuf::from("docs/index.html"),
            bytes: 12 * 1024 + 600,
            missing: Vec::new(),
            duration_ms: 3,
        };

        assert_eq!(
            summary(&result),
            "Final build complete!\nFile: docs/index.html\nSize: 13 KB\n"
        );
    }

    #[tokio::test]
    async fn builds_configured_output() {
        let temp = tempdir().unwrap();
        let config_path = project(temp.path(), SHELL, "");

        run(&config_path, None, false, false).await.unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("configured.html")).unwrap(),
            "<html><head><style>body{color:red}</style></head><body>A &amp; B&lt;x&gt;</body></html>"
        );
    }

    #[tokio::test]
    async fn output_flag_overrides_config() {
        let temp = tempdir().unwrap();
        let config_path = project(temp.path(), SHELL, "");
        let flag_output = temp.path().join("flag.html");

        run(&config_path, Some(flag_output.clone()), false, false)
            .await
            .unwrap();

        assert!(flag_output.exists());
        assert!(!temp.path().join("configured.html").exists());
    }

    #[tokio::test]
    async fn strict_config_fails_on_missing_target() {
        let temp = tempdir().unwrap();
        let shell = r#"<link rel="stylesheet" href="output.css"><!-- PRD_CONTENT_PLACEHOLDER -->"#;
        let config_path = project(temp.path(), shell, "[build]\nstrict = true\n");

        assert!(run(&config_path, None, false, false).await.is_err());
        assert!(!temp.path().join("configured.html").exists());
    }

    #[tokio::test]
    async fn strict_flag_turns_on_strict_mode() {
        let temp = tempdir().unwrap();
        let config_path = project(temp.path(), "<body></body>", "");

        assert!(run(&config_path, None, true, false).await.is_err());

        run(&config_path, None, false, false).await.unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("configured.html")).unwrap(),
            "<body></body>"
        );
    }

    #[tokio::test]
    async fn minify_flag_minifies_stylesheet() {
        let temp = tempdir().unwrap();
        let config_path = project(temp.path(), SHELL, "");
        fs::write(temp.path().join("output.css"), "body {\n  color: red;\n}\n").unwrap();

        run(&config_path, None, false, true).await.unwrap();

        let html = fs::read_to_string(temp.path().join("configured.html")).unwrap();
        assert!(html.contains("<style>body{color:red}</style>"));
    }
}
