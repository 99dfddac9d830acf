//! Style configuration record and validation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Design tokens and scan globs handed to the utility-CSS framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Glob patterns of source files scanned for class usage
    pub content: BTreeSet<String>,

    /// Palette families, each mapping a shade or accent name to a hex color.
    /// Deserialized entries are merged over the default palettes.
    #[serde(deserialize_with = "merge_default_colors")]
    pub colors: BTreeMap<String, BTreeMap<String, String>>,

    /// Font family overrides, in priority order
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Framework plugins to register
    pub plugins: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let dark = palette(&[("900", "#0f172a"), ("800", "#1e293b"), ("700", "#334155")]);
        let neon = palette(&[
            ("blue", "#3b82f6"),
            ("purple", "#8b5cf6"),
            ("cyan", "#06b6d4"),
        ]);

        let mono = [
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "monospace",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect();

        Self {
            content: BTreeSet::from(["./src/**/*.html".to_string()]),
            colors: BTreeMap::from([("dark".to_string(), dark), ("neon".to_string(), neon)]),
            font_family: BTreeMap::from([("mono".to_string(), mono)]),
            plugins: Vec::new(),
        }
    }
}

fn palette(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect()
}

fn merge_default_colors<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, BTreeMap<String, String>>::deserialize(deserializer)?;
    let mut colors = StyleConfig::default().colors;
    for (family, shades) in overrides {
        colors.entry(family).or_default().extend(shades);
    }
    Ok(colors)
}

/// Errors found when validating a style configuration.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Style config has no content globs")]
    NoContent,

    #[error("Invalid color {family}.{name}: {value}")]
    InvalidColor {
        family: String,
        name: String,
        value: String,
    },

    #[error("Font family '{0}' has no fonts")]
    EmptyFontStack(String),

    #[error("Failed to serialize style config: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn hex_color() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex color pattern is valid")
    })
}

impl StyleConfig {
    /// Check globs, colors and font stacks.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.content.is_empty() {
            return Err(StyleError::NoContent);
        }

        for (family, shades) in &self.colors {
            for (name, value) in shades {
                if !hex_color().is_match(value) {
                    return Err(StyleError::InvalidColor {
                        family: family.clone(),
                        name: name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        if let Some((name, _)) = self.font_family.iter().find(|(_, fonts)| fonts.is_empty()) {
            return Err(StyleError::EmptyFontStack(name.clone()));
        }

        Ok(())
    }

    /// Serialize in the framework's config shape as pretty JSON.
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(&self.framework_value())?)
    }

    /// The framework config object: theme tokens go under `theme.extend`.
    pub(crate) fn framework_value(&self) -> serde_json::Value {
        serde_json::json!({
            "content": self.content,
            "theme": {
                "extend": {
                    "colors": self.colors,
                    "fontFamily": self.font_family,
                },
            },
            "plugins": self.plugins,
        })
    }
}
