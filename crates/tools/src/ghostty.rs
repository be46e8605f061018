//! Ghostty terminal emulator theme spec.
//!
//! Output format: flat `key = #hex` lines for the named colors plus a
//! 16-slot ANSI palette block of `palette = N=#hex` lines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tinct_palette::{Mapping, Palette};

use crate::{SpecError, ToolSpec, resolve_palette_key};

/// Keys a rendered theme must define, checked by `validate`.
const REQUIRED_KEYS: &[&str] = &[
    "background",
    "foreground",
    "cursor-color",
    "selection-background",
    "selection-foreground",
];

/// Mapping entries `render` consumes, in output order. The named
/// colors come first, the ANSI palette block last.
const REQUIRED_MAPPING_KEYS: &[&str] = &[
    "background",
    "foreground",
    "cursor-color",
    "selection-background",
    "selection-foreground",
    "palette",
];

const PALETTE_SLOTS: usize = 16;

static PALETTE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^palette\s*=\s*(\d+)\s*=\s*(#[0-9A-Fa-f]{6,8})$").unwrap());
static KEY_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z-]+)\s*=\s*(#[0-9A-Fa-f]{6,8})$").unwrap());

#[derive(Debug)]
pub struct Ghostty;

fn mapping_str<'m>(mapping: &'m Mapping, key: &str) -> Result<&'m str, SpecError> {
    let value = mapping
        .get(key)
        .ok_or_else(|| SpecError::MissingMappingKey(key.to_string()))?;
    value.as_str().ok_or_else(|| SpecError::TypeMismatch {
        key: key.to_string(),
        expected: "a palette key string",
    })
}

impl ToolSpec for Ghostty {
    fn name(&self) -> &str {
        "ghostty"
    }

    fn render(
        &self,
        _theme_name: &str,
        palette: &Palette,
        mapping: &Mapping,
    ) -> Result<String, SpecError> {
        let mut lines = Vec::new();

        let (named_keys, _) = REQUIRED_MAPPING_KEYS
            .split_at(REQUIRED_MAPPING_KEYS.len() - 1);
        for &key in named_keys {
            let palette_key = mapping_str(mapping, key)?;
            let color = resolve_palette_key(palette, palette_key)?;
            lines.push(format!("{key} = {color}"));
        }

        let slots = mapping
            .get("palette")
            .ok_or_else(|| SpecError::MissingMappingKey("palette".to_string()))?;
        let Value::Object(slots) = slots else {
            return Err(SpecError::TypeMismatch {
                key: "palette".to_string(),
                expected: "an index -> palette key object",
            });
        };
        for i in 0..PALETTE_SLOTS {
            let idx = i.to_string();
            let palette_key = slots
                .get(&idx)
                .ok_or_else(|| SpecError::MissingPaletteIndex(idx.clone()))?;
            let palette_key = palette_key.as_str().ok_or_else(|| SpecError::TypeMismatch {
                key: format!("palette.{idx}"),
                expected: "a palette key string",
            })?;
            let color = resolve_palette_key(palette, palette_key)?;
            lines.push(format!("palette = {i}={color}"));
        }

        Ok(lines.join("\n") + "\n")
    }

    fn validate(&self, text: &str) -> Vec<String> {
        let mut found_keys = Vec::new();
        let mut palette_indices = Vec::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(caps) = PALETTE_LINE_RE.captures(line) {
                if let Ok(index) = caps[1].parse::<usize>() {
                    palette_indices.push(index);
                }
                continue;
            }
            if let Some(caps) = KEY_LINE_RE.captures(line) {
                found_keys.push(caps[1].to_string());
            }
        }

        let mut errors = Vec::new();

        let mut missing_keys: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !found_keys.iter().any(|found| found == key))
            .collect();
        missing_keys.sort_unstable();
        if !missing_keys.is_empty() {
            errors.push(format!("Missing keys: {}", missing_keys.join(", ")));
        }

        let missing_indices: Vec<String> = (0..PALETTE_SLOTS)
            .filter(|i| !palette_indices.contains(i))
            .map(|i| i.to_string())
            .collect();
        if !missing_indices.is_empty() {
            errors.push(format!(
                "Missing palette indices: {}",
                missing_indices.join(", ")
            ));
        }

        errors
    }
}
