//! Lazygit TUI theme spec.
//!
//! Output format: a YAML fragment with a `gui.authorColors` block and
//! a `gui.theme` block holding twelve fixed style-color keys, each a
//! list of values.

use serde_json::Value;
use tinct_palette::{Mapping, Palette};

use crate::{SpecError, ToolSpec};

/// Theme keys a rendered config must define, in output order.
const ORDER: &[&str] = &[
    "activeBorderColor",
    "inactiveBorderColor",
    "searchingActiveBorderColor",
    "optionsTextColor",
    "selectedLineBgColor",
    "inactiveViewSelectedLineBgColor",
    "cherryPickedCommitFgColor",
    "cherryPickedCommitBgColor",
    "markedBaseCommitFgColor",
    "markedBaseCommitBgColor",
    "unstagedChangesColor",
    "defaultFgColor",
];

#[derive(Debug)]
pub struct Lazygit;

/// Resolve a mapping token against the palette, falling back to the
/// token itself: lazygit values may be literal style words ("bold",
/// "default") as well as palette keys. Hex colors are quoted for YAML.
fn style_value(palette: &Palette, token: &str) -> String {
    let value = palette.get(token).map(String::as_str).unwrap_or(token);
    if value.starts_with('#') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

impl ToolSpec for Lazygit {
    fn name(&self) -> &str {
        "lazygit"
    }

    fn render(
        &self,
        _theme_name: &str,
        palette: &Palette,
        mapping: &Mapping,
    ) -> Result<String, SpecError> {
        let author_token = mapping
            .get("authorColor")
            .ok_or_else(|| SpecError::MissingMappingKey("authorColor".to_string()))?;
        let author_token = author_token.as_str().ok_or_else(|| SpecError::TypeMismatch {
            key: "authorColor".to_string(),
            expected: "a palette key string",
        })?;

        let mut lines = vec![
            "gui:".to_string(),
            "  authorColors:".to_string(),
            format!("    '*': {}", style_value(palette, author_token)),
            "  theme:".to_string(),
        ];

        for key in ORDER {
            let tokens = mapping
                .get(*key)
                .ok_or_else(|| SpecError::MissingMappingKey(key.to_string()))?;
            let Value::Array(tokens) = tokens else {
                return Err(SpecError::TypeMismatch {
                    key: key.to_string(),
                    expected: "a list",
                });
            };
            lines.push(format!("    {key}:"));
            for token in tokens {
                let token = token.as_str().ok_or_else(|| SpecError::TypeMismatch {
                    key: key.to_string(),
                    expected: "a list of strings",
                })?;
                lines.push(format!("      - {}", style_value(palette, token)));
            }
        }

        Ok(lines.join("\n") + "\n")
    }

    fn validate(&self, text: &str) -> Vec<String> {
        if !text.contains("authorColors:") || !text.contains("'*':") {
            return vec!["Missing authorColors".to_string()];
        }

        let mut found_keys = Vec::new();
        let mut in_gui = false;
        let mut in_theme = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if line.starts_with("gui:") {
                in_gui = true;
                in_theme = false;
                continue;
            }
            if in_gui && line.starts_with("  theme:") {
                in_theme = true;
                continue;
            }
            if in_theme
                && line.starts_with("    ")
                && let Some(key) = trimmed.strip_suffix(':')
            {
                found_keys.push(key.to_string());
            }
        }

        let mut missing: Vec<&str> = ORDER
            .iter()
            .copied()
            .filter(|key| !found_keys.iter().any(|found| found == key))
            .collect();
        missing.sort_unstable();
        if missing.is_empty() {
            Vec::new()
        } else {
            vec![format!("Missing keys: {}", missing.join(", "))]
        }
    }
}
