//! Render and validate drivers.
//!
//! The drivers iterate palettes (or rendered theme files) in sorted
//! order and hand each one to a [`ToolSpec`]. Rendering fails fast on
//! the first component error; validation collects per-file issues and
//! never aborts mid-scan.
//!
//! File writes are not transactional: a failure mid-loop leaves the
//! themes already written in place. Outputs are idempotently
//! regenerable, so a rerun after fixing the input heals the set.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tinct_palette::{load_mapping, load_palette};
use tinct_tools::ToolSpec;

pub use error::RenderError;

/// Write `content` to `path`, creating parent directories and
/// enforcing exactly one trailing newline.
pub fn write_output(path: &Path, content: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if content.ends_with('\n') {
        fs::write(path, content)
    } else {
        fs::write(path, format!("{content}\n"))
    }
}

/// List theme files in a directory: sorted names with `ext` stripped,
/// dotfiles and `.gitkeep` skipped. Missing directory yields an empty
/// list.
pub fn list_themes(dir: &Path, ext: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.') && name.as_str() != ".gitkeep")
        .map(|name| match name.strip_suffix(ext) {
            Some(stem) if !ext.is_empty() => stem.to_string(),
            _ => name,
        })
        .collect();
    names.sort_unstable();
    names
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    paths.sort_unstable();
    Ok(paths)
}

/// Render every palette in `palettes_dir` through `spec`, writing one
/// theme file per palette into `out_dir` (filename = theme name).
///
/// The mapping is loaded once. Palette files are `*.json`, dotfiles
/// skipped, processed in sorted order. `theme_filter` restricts the
/// run to a single theme name. Returns the paths written.
pub fn render_all(
    palettes_dir: &Path,
    mapping_path: &Path,
    out_dir: &Path,
    spec: &dyn ToolSpec,
    theme_filter: Option<&str>,
) -> Result<Vec<PathBuf>, RenderError> {
    if !palettes_dir.is_dir() {
        return Err(RenderError::PalettesDirMissing(palettes_dir.to_path_buf()));
    }
    let mapping = load_mapping(mapping_path)?;

    let palette_files: Vec<PathBuf> = sorted_entries(palettes_dir)?
        .into_iter()
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "json")
                && path
                    .file_name()
                    .is_some_and(|name| !name.to_string_lossy().starts_with('.'))
        })
        .collect();
    if palette_files.is_empty() {
        return Err(RenderError::NoPalettes(palettes_dir.to_path_buf()));
    }

    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for path in palette_files {
        let (theme_name, palette) = load_palette(&path)?;
        if theme_filter.is_some_and(|filter| filter != theme_name) {
            continue;
        }
        let content = spec.render(&theme_name, &palette, &mapping)?;
        let out_path = out_dir.join(&theme_name);
        write_output(&out_path, &content)?;
        log::debug!("{}: wrote {}", spec.name(), out_path.display());
        written.push(out_path);
    }
    Ok(written)
}

/// Validate every rendered theme file in `themes_dir` with `spec`.
///
/// Returns the count of valid files and, for each invalid file, its
/// path with the collected issues. Per-file issues never abort the
/// scan; only a missing or empty directory is fatal.
pub fn validate_all(
    themes_dir: &Path,
    spec: &dyn ToolSpec,
    theme_filter: Option<&str>,
) -> Result<(usize, Vec<(PathBuf, Vec<String>)>), RenderError> {
    if !themes_dir.is_dir() {
        return Err(RenderError::ThemesDirMissing(themes_dir.to_path_buf()));
    }
    let files = sorted_entries(themes_dir)?;
    if files.is_empty() {
        return Err(RenderError::NoThemes(themes_dir.to_path_buf()));
    }

    let mut validated = 0;
    let mut errors = Vec::new();
    for path in files {
        if path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }
        if theme_filter.is_some_and(|filter| filter != name) {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        let issues = spec.validate(&text);
        if issues.is_empty() {
            validated += 1;
        } else {
            errors.push((path, issues));
        }
    }
    Ok((validated, errors))
}
