//! Tinct: palette resolution and template rendering for porting Modus
//! themes to terminal tools.
//!
//! The pipeline is a batch, single-pass transformation: raw palette
//! JSON → alias resolution → tool-specific render (structural spec or
//! generic template) → output text → tool-specific validation.
//!
//! This crate is the facade; each stage lives in its own workspace
//! member:
//!
//! - `tinct-color` — hex decoding and WCAG contrast math
//! - `tinct-palette` — palette/mapping loading and alias resolution
//! - `tinct-template` — `{kind:key}` token substitution
//! - `tinct-tools` — the per-tool render + validate specs
//! - `tinct-render` — the directory-level drivers

pub use tinct_color::{
    ColorError, Rgb, WCAG_AAA_NORMAL, contrast_ratio, meets_wcag_aaa, relative_luminance,
    validate_palette_contrast,
};
pub use tinct_palette::{
    Mapping, Palette, PaletteError, UNSPECIFIED, load_mapping, load_palette, resolve,
};
pub use tinct_render::{RenderError, list_themes, render_all, validate_all, write_output};
pub use tinct_template::{
    TemplateError, appearance, render_template, theme_title, validate_template,
};
pub use tinct_tools::{Ghostty, Lazygit, SpecError, TemplateSpec, ToolSpec, lookup, tool_names};
