//! Document assembly by literal substitution into the HTML shell.

use std::fmt;

use crate::assets::Sources;

/// Link tag replaced by the inline stylesheet.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="output.css">"#;

/// Placeholder for the primary document.
pub const PRIMARY_PLACEHOLDER: &str = "<!-- PRD_CONTENT_PLACEHOLDER -->";

/// Placeholder for the secondary document.
pub const SECONDARY_PLACEHOLDER: &str = "<!-- PLANO_CONTENT_PLACEHOLDER -->";

/// Substitution targets searched for in the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub stylesheet_link: String,
    pub primary_placeholder: String,
    pub secondary_placeholder: String,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            stylesheet_link: STYLESHEET_LINK.to_string(),
            primary_placeholder: PRIMARY_PLACEHOLDER.to_string(),
            secondary_placeholder: SECONDARY_PLACEHOLDER.to_string(),
        }
    }
}

/// Identifies one of the three substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    StylesheetLink,
    PrimaryPlaceholder,
    SecondaryPlaceholder,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::StylesheetLink => "stylesheet link",
            Target::PrimaryPlaceholder => "primary placeholder",
            Target::SecondaryPlaceholder => "secondary placeholder",
        };
        f.write_str(name)
    }
}

/// Assembled document plus the targets that were not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Final HTML
    pub html: String,

    /// Targets absent from the shell, in substitution order
    pub missing: Vec<Target>,
}

/// Inline the stylesheet and both documents into the shell.
///
/// Each target is replaced at its first occurrence only, in order: link tag,
/// primary placeholder, secondary placeholder. Later substitutions search the
/// already rewritten buffer. A target that does not occur is skipped.
pub fn assemble(sources: &Sources, targets: &Targets) -> Assembly {
    let mut html = sources.shell.clone();
    let mut missing = Vec::new();

    let steps = [
        (
            Target::StylesheetLink,
            targets.stylesheet_link.as_str(),
            format!("<style>{}</style>", sources.stylesheet),
        ),
        (
            Target::PrimaryPlaceholder,
            targets.primary_placeholder.as_str(),
            escape_html(&sources.primary),
        ),
        (
            Target::SecondaryPlaceholder,
            targets.secondary_placeholder.as_str(),
            escape_html(&sources.secondary),
        ),
    ];

    for (target, needle, replacement) in steps {
        if !replace_first(&mut html, needle, &replacement) {
            tracing::debug!("No {} found in shell", target);
            missing.push(target);
        }
    }

    Assembly { html, missing }
}

/// Escape text for an HTML text node.
///
/// Only `&`, `<` and `>` are replaced, so the result is not safe inside
/// attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn replace_first(haystack: &mut String, needle: &str, replacement: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    match haystack.find(needle) {
        Some(start) => {
            haystack.replace_range(start..start + needle.len(), replacement);
            true
        }
        None => false,
    }
}
