//! Error types for palette loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Palette not found: {}", .0.display())]
    PaletteNotFound(PathBuf),

    #[error("Mapping not found: {}", .0.display())]
    MappingNotFound(PathBuf),

    #[error("Circular palette reference: {0}")]
    Cycle(String),

    #[error("Missing palette key: {0}")]
    MissingKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
