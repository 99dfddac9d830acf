//! Rendering the style configuration as a framework config module.

use crate::config::{StyleConfig, StyleError};

const TYPE_ANNOTATION: &str = "/** @type {import('tailwindcss').Config} */";

/// Render `config` as a CommonJS `tailwind.config.js` module.
///
/// Plugins are emitted as `require(...)` calls since the framework expects
/// plugin handlers, not package names.
pub fn render_tailwind_config(config: &StyleConfig) -> Result<String, StyleError> {
    let value = config.framework_value();
    let content = indent(&serde_json::to_string_pretty(&value["content"])?);
    let theme = indent(&serde_json::to_string_pretty(&value["theme"])?);

    let plugins = if config.plugins.is_empty() {
        "[]".to_string()
    } else {
        let mut list = String::from("[\n");
        for name in &config.plugins {
            list.push_str(&format!("    require({}),\n", serde_json::to_string(name)?));
        }
        list.push_str("  ]");
        list
    };

    Ok(format!(
        "{TYPE_ANNOTATION}\nmodule.exports = {{\n  content: {content},\n  theme: {theme},\n  plugins: {plugins},\n}};\n"
    ))
}

fn indent(json: &str) -> String {
    json.replace('\n', "\n  ")
}
