//! Palette and mapping data model for Modus theme ports.
//!
//! A palette is a flat key → value map where a value is a `#RRGGBB`
//! color, the reserved sentinel `"unspecified"`, or an alias naming
//! another key in the same palette. This crate loads palette and
//! mapping JSON files and resolves alias chains so that downstream
//! renderers only ever see literal values.

pub mod error;
mod load;
mod resolve;

use std::collections::BTreeMap;

pub use error::PaletteError;
pub use load::{load_mapping, load_palette};
pub use resolve::resolve;

/// Color value reserved for palette entries a theme deliberately
/// leaves unset. It survives resolution and must be rejected by any
/// context that needs a real color.
pub const UNSPECIFIED: &str = "unspecified";

/// A named color map for one theme variant.
///
/// `BTreeMap` keeps iteration deterministic, so resolution order,
/// rendered output and error messages are stable across runs.
pub type Palette = BTreeMap<String, String>;

/// Tool-specific binding of semantic role names to palette keys
/// (a single key or an ordered list) plus auxiliary scalar settings.
pub type Mapping = BTreeMap<String, serde_json::Value>;
