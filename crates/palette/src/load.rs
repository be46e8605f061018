//! Loading palette and mapping JSON files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Mapping, Palette, PaletteError, resolve};

/// The two accepted palette file shapes: an envelope with an optional
/// explicit name, or a bare key → value object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Named {
        name: Option<String>,
        palette: Palette,
    },
    Bare(Palette),
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load a palette JSON file and resolve all alias references.
///
/// Returns the theme name (the explicit `"name"` field, falling back
/// to the file stem) and the resolved palette. Resolution happens here
/// so rendered themes never contain alias names.
pub fn load_palette(path: &Path) -> Result<(String, Palette), PaletteError> {
    if !path.is_file() {
        return Err(PaletteError::PaletteNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let (name, palette) = match serde_json::from_str(&text)? {
        PaletteFile::Named { name, palette } => (name.unwrap_or_else(|| file_stem(path)), palette),
        PaletteFile::Bare(palette) => (file_stem(path), palette),
    };
    Ok((name, resolve(&palette)?))
}

/// Load a tool mapping JSON file.
pub fn load_mapping(path: &Path) -> Result<Mapping, PaletteError> {
    if !path.is_file() {
        return Err(PaletteError::MappingNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
