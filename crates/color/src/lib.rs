//! WCAG contrast utilities for Modus theme ports.
//!
//! Modus themes are designed to meet WCAG AAA, which requires a minimum
//! contrast ratio of 7:1 for normal text. This crate provides the hex
//! color decoding and the luminance/contrast math the rest of the
//! engine builds on.

use std::collections::BTreeMap;

use thiserror::Error;

/// Error type for color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected #RRGGBB format, got: {0}")]
    Format(String),
}

/// An opaque sRGB color decoded from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` hex color string.
    ///
    /// The input must be exactly seven characters, `#`-prefixed, with
    /// six hex digits. Shorthand `#RGB` is not accepted: palette files
    /// always carry the full form.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        // ASCII check before slicing: a multibyte char would put a
        // char boundary inside a component range.
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| ColorError::Format(hex.to_string()))?;
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::Format(hex.to_string()))
        };
        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }
}

// WCAG compliance thresholds.
pub const WCAG_AA_NORMAL: f64 = 4.5;
pub const WCAG_AA_LARGE: f64 = 3.0;
/// AAA for normal text, the standard Modus themes are designed to meet.
pub const WCAG_AAA_NORMAL: f64 = 7.0;
pub const WCAG_AAA_LARGE: f64 = 4.5;

/// Compute the relative luminance of a hex color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    let rgb = Rgb::parse(hex)?;

    fn channel(value: u8) -> f64 {
        let srgb = f64::from(value) / 255.0;
        if srgb <= 0.04045 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    Ok(0.2126 * channel(rgb.r) + 0.7152 * channel(rgb.g) + 0.0722 * channel(rgb.b))
}

/// Compute the WCAG 2.1 contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]; the result is the same regardless
/// of argument order.
pub fn contrast_ratio(fg: &str, bg: &str) -> Result<f64, ColorError> {
    let la = relative_luminance(fg)?;
    let lb = relative_luminance(bg)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Check whether two colors meet WCAG AAA for normal text (7:1).
pub fn meets_wcag_aaa(fg: &str, bg: &str) -> Result<bool, ColorError> {
    Ok(contrast_ratio(fg, bg)? >= WCAG_AAA_NORMAL)
}

/// Foreground keys checked by default in [`validate_palette_contrast`].
///
/// These are the Modus palette entries that end up as text colors in
/// practice; named tints that only paint backgrounds are not listed.
const DEFAULT_FG_KEYS: &[&str] = &[
    "fg-main",
    "fg-dim",
    "fg-alt",
    "red",
    "green",
    "blue",
    "yellow",
    "magenta",
    "cyan",
    "red-warmer",
    "green-warmer",
    "blue-warmer",
    "red-cooler",
    "green-cooler",
    "blue-cooler",
    "red-faint",
    "green-faint",
    "blue-faint",
    "yellow-warmer",
    "yellow-cooler",
    "yellow-faint",
    "magenta-warmer",
    "magenta-cooler",
    "magenta-faint",
    "cyan-warmer",
    "cyan-cooler",
    "cyan-faint",
];

/// Warn about foreground colors that fall short of WCAG AAA against
/// the palette background.
///
/// This is advisory, not a hard gate: keys absent from the palette or
/// not `#`-prefixed (aliases left unresolved, the `unspecified`
/// sentinel) are silently skipped. A missing or non-hex background
/// short-circuits with a single issue.
pub fn validate_palette_contrast(
    palette: &BTreeMap<String, String>,
    bg_key: &str,
    fg_keys: Option<&[&str]>,
) -> Vec<String> {
    let Some(bg_color) = palette.get(bg_key).filter(|c| c.starts_with('#')) else {
        return vec![format!("Background key '{bg_key}' not found or invalid")];
    };

    let mut warnings = Vec::new();
    for key in fg_keys.unwrap_or(DEFAULT_FG_KEYS) {
        let Some(fg_color) = palette.get(*key).filter(|c| c.starts_with('#')) else {
            continue;
        };
        let Ok(ratio) = contrast_ratio(fg_color, bg_color) else {
            warnings.push(format!("{key} ({fg_color}): malformed hex color"));
            continue;
        };
        if ratio < WCAG_AAA_NORMAL {
            warnings.push(format!(
                "{key} ({fg_color}) on {bg_key} ({bg_color}): ratio {ratio:.2}:1 < 7:1 (WCAG AAA)"
            ));
        }
    }
    warnings
}
