//! Token substitution for Modus theme templates.
//!
//! A template is a text blob containing typed placeholder tokens of
//! the form `{kind:key}`:
//!
//! - `{color:K}` — the resolved palette value for `K`
//! - `{rgb:K}` — the `R;G;B` decimal decomposition of `K`'s hex color
//! - `{value:K}` — a scalar setting from the tool mapping
//! - `{meta:K}` — a computed property of the run (`theme`,
//!   `theme_title`, `appearance`)
//!
//! Rendering is fail-fast: a broken token reference means the template
//! or mapping has a configuration bug, so no output is trustworthy.
//! [`validate_template`] offers the non-failing dry-run counterpart.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tinct_color::{ColorError, Rgb};
use tinct_palette::{Mapping, Palette, UNSPECIFIED};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(color|value|meta|rgb):([A-Za-z0-9_-]+)\}").unwrap());

/// Meta keys templates may reference.
const VALID_META_KEYS: &[&str] = &["theme", "theme_title", "appearance"];

/// Errors raised while substituting template tokens.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing palette key: {0}")]
    MissingPaletteKey(String),

    #[error("Missing mapping key: {0}")]
    MissingMappingKey(String),

    #[error("Palette key '{0}' is unspecified and cannot be used in templates")]
    Unspecified(String),

    #[error("Unknown meta key: {0}")]
    UnknownMeta(String),

    #[error("Unknown token kind: {0}")]
    UnknownKind(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Title-case a theme name: `modus-operandi-tinted` becomes
/// `Modus Operandi Tinted`.
pub fn theme_title(theme_name: &str) -> String {
    theme_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The `light`/`dark` appearance of a theme, derived from its name.
/// Only the operandi family is light.
pub fn appearance(theme_name: &str) -> &'static str {
    if theme_name.starts_with("modus-operandi") {
        "light"
    } else {
        "dark"
    }
}

fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn expand_token(
    kind: &str,
    key: &str,
    palette: &Palette,
    mapping: &Mapping,
    theme_name: &str,
) -> Result<String, TemplateError> {
    match kind {
        "color" => {
            let value = palette
                .get(key)
                .ok_or_else(|| TemplateError::MissingPaletteKey(key.to_string()))?;
            if value == UNSPECIFIED {
                return Err(TemplateError::Unspecified(key.to_string()));
            }
            Ok(value.clone())
        }
        "rgb" => {
            let value = palette
                .get(key)
                .ok_or_else(|| TemplateError::MissingPaletteKey(key.to_string()))?;
            // One level of alias-follow for palettes handed in raw.
            let value = palette.get(value.as_str()).unwrap_or(value);
            if value == UNSPECIFIED {
                return Err(TemplateError::Unspecified(key.to_string()));
            }
            let rgb = Rgb::parse(value)?;
            Ok(format!("{};{};{}", rgb.r, rgb.g, rgb.b))
        }
        "value" => mapping
            .get(key)
            .map(stringify)
            .ok_or_else(|| TemplateError::MissingMappingKey(key.to_string())),
        "meta" => match key {
            "theme" => Ok(theme_name.to_string()),
            "theme_title" => Ok(theme_title(theme_name)),
            "appearance" => Ok(appearance(theme_name).to_string()),
            other => Err(TemplateError::UnknownMeta(other.to_string())),
        },
        // Unreachable through TOKEN_RE, kept so the match is total.
        other => Err(TemplateError::UnknownKind(other.to_string())),
    }
}

/// Substitute every `{kind:key}` token in `template`, left to right.
///
/// Text outside tokens passes through untouched. Any token that cannot
/// be expanded aborts the render with the corresponding error.
pub fn render_template(
    template: &str,
    palette: &Palette,
    mapping: &Mapping,
    theme_name: &str,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in TOKEN_RE.captures_iter(template) {
        let token = caps.get(0).unwrap();
        out.push_str(&template[last..token.start()]);
        out.push_str(&expand_token(&caps[1], &caps[2], palette, mapping, theme_name)?);
        last = token.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Check every distinct token reference in `template` against the
/// available key sets without substituting anything.
///
/// Returns one message per invalid `(kind, key)` pair; never fails.
pub fn validate_template(
    template: &str,
    palette_keys: &BTreeSet<String>,
    mapping_keys: &BTreeSet<String>,
) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();

    for caps in TOKEN_RE.captures_iter(template) {
        let (kind, key) = (&caps[1], &caps[2]);
        if !seen.insert((kind.to_string(), key.to_string())) {
            continue;
        }
        match kind {
            "color" | "rgb" => {
                if !palette_keys.contains(key) {
                    errors.push(format!("Unknown palette key: {key}"));
                }
            }
            "value" => {
                if !mapping_keys.contains(key) {
                    errors.push(format!("Unknown mapping key: {key}"));
                }
            }
            "meta" => {
                if !VALID_META_KEYS.contains(&key) {
                    errors.push(format!("Unknown meta key: {key}"));
                }
            }
            _ => {}
        }
    }

    errors
}
