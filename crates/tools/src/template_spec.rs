//! Generic template-driven tool spec.
//!
//! Tools without structural output rules ship a template file instead
//! of a bespoke renderer. This spec wraps such a template (plus the
//! keys its format requires) behind the same [`ToolSpec`] contract the
//! drivers already speak.

use tinct_palette::{Mapping, Palette};
use tinct_template::render_template;

use crate::{SpecError, ToolSpec};

/// Pseudo-key in a required-key list standing for the 16-slot ANSI
/// palette block rather than a single `key = value` line.
const PALETTE_PSEUDO_KEY: &str = "palette";

pub struct TemplateSpec {
    name: String,
    template: String,
    required_keys: Vec<String>,
}

impl TemplateSpec {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        required_keys: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            required_keys,
        }
    }
}

/// True if any line assigns `key`, i.e. matches `^\s*key\s*=`.
fn has_key_line(text: &str, key: &str) -> bool {
    text.lines().any(|line| {
        line.trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    })
}

impl ToolSpec for TemplateSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(
        &self,
        theme_name: &str,
        palette: &Palette,
        mapping: &Mapping,
    ) -> Result<String, SpecError> {
        Ok(render_template(&self.template, palette, mapping, theme_name)?)
    }

    fn validate(&self, text: &str) -> Vec<String> {
        let mut issues = Vec::new();
        for key in &self.required_keys {
            if key == PALETTE_PSEUDO_KEY {
                if !text.contains("palette =") {
                    issues.push("Missing palette entries".to_string());
                }
            } else if !has_key_line(text, key) {
                issues.push(format!("Missing key: {key}"));
            }
        }
        issues
    }
}
