//! The aggregated error type for driver operations.

use std::path::PathBuf;

use thiserror::Error;
use tinct_palette::PaletteError;
use tinct_tools::SpecError;

/// The main error enum for a render or validate run. Every component
/// failure is fatal during rendering: a malformed template or mapping
/// is a configuration bug and no output is trustworthy until it is
/// fixed.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Palettes directory missing: {}", .0.display())]
    PalettesDirMissing(PathBuf),

    #[error("Themes directory missing: {}", .0.display())]
    ThemesDirMissing(PathBuf),

    #[error("No palettes found in {}", .0.display())]
    NoPalettes(PathBuf),

    #[error("No theme files found to validate in {}", .0.display())]
    NoThemes(PathBuf),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
