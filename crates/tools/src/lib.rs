//! Tool specs: the render + validate contract, one implementation per
//! target tool.
//!
//! A tool spec turns a resolved palette and a mapping into that tool's
//! theme file format, and can inspect a rendered file to report what
//! its format requires but the file lacks. The drivers are polymorphic
//! over [`ToolSpec`]; adding a tool means adding an implementation and
//! a registry entry, never touching the drivers.

mod ghostty;
mod lazygit;
mod template_spec;

use thiserror::Error;
use tinct_palette::{Mapping, Palette};
use tinct_template::TemplateError;

pub use ghostty::Ghostty;
pub use lazygit::Lazygit;
pub use template_spec::TemplateSpec;

/// Errors raised by a tool spec's `render`.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Missing mapping key: {0}")]
    MissingMappingKey(String),

    #[error("Missing palette key: {0}")]
    MissingPaletteKey(String),

    #[error("Missing palette mapping for index {0}")]
    MissingPaletteIndex(String),

    #[error("Mapping for {key} must be {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// The two-operation contract every supported tool implements.
///
/// Both operations are pure over already-resolved data: `render` never
/// touches the filesystem, and `validate` only inspects the text it is
/// given.
pub trait ToolSpec {
    /// Tool name, used for registry lookup and diagnostics.
    fn name(&self) -> &str;

    /// Render one theme file from a resolved palette and a mapping.
    ///
    /// Every mapping key the tool requires must be present, and every
    /// palette key the mapping dereferences must exist.
    fn render(
        &self,
        theme_name: &str,
        palette: &Palette,
        mapping: &Mapping,
    ) -> Result<String, SpecError>;

    /// Report what a rendered file is missing relative to the tool's
    /// required-key set. An empty list means the file is valid.
    fn validate(&self, text: &str) -> Vec<String>;
}

static GHOSTTY: Ghostty = Ghostty;
static LAZYGIT: Lazygit = Lazygit;

/// Look up a built-in tool spec by name.
pub fn lookup(name: &str) -> Option<&'static dyn ToolSpec> {
    match name {
        "ghostty" => Some(&GHOSTTY),
        "lazygit" => Some(&LAZYGIT),
        _ => None,
    }
}

/// Names of the built-in tools, in registry order.
pub fn tool_names() -> &'static [&'static str] {
    &["ghostty", "lazygit"]
}

/// Resolve a palette key to its color, for specs whose mapping values
/// reference palette entries directly.
fn resolve_palette_key<'p>(palette: &'p Palette, key: &str) -> Result<&'p str, SpecError> {
    palette
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| SpecError::MissingPaletteKey(key.to_string()))
}
