//! Alias resolution over a raw palette.
//!
//! A value that equals the name of another palette key is treated as
//! an alias and followed transitively. Hex colors are `#`-prefixed, so
//! a literal value can never collide with a key name today; if non-hex
//! values are ever introduced this heuristic needs an explicit alias
//! marker instead.

use crate::{Palette, PaletteError};

/// Resolve every alias chain in `palette`.
///
/// Returns a palette in which no value names another key: every value
/// is a literal color string or the `unspecified` sentinel. A chain
/// that revisits a key fails with [`PaletteError::Cycle`] carrying the
/// full `a -> b -> a` chain.
///
/// Recursion depth is bounded by the chain check: each step appends a
/// distinct key, so it can never exceed the palette's key count.
pub fn resolve(palette: &Palette) -> Result<Palette, PaletteError> {
    let mut resolved = Palette::new();
    for key in palette.keys() {
        resolve_value(palette, key, &mut resolved, &mut Vec::new())?;
    }
    Ok(resolved)
}

fn resolve_value<'p>(
    palette: &'p Palette,
    key: &'p str,
    resolved: &mut Palette,
    chain: &mut Vec<&'p str>,
) -> Result<String, PaletteError> {
    if let Some(value) = resolved.get(key) {
        return Ok(value.clone());
    }
    if chain.contains(&key) {
        let mut cycle = chain.clone();
        cycle.push(key);
        return Err(PaletteError::Cycle(cycle.join(" -> ")));
    }

    chain.push(key);
    let raw = palette
        .get(key)
        .ok_or_else(|| PaletteError::MissingKey(key.to_string()))?;
    let value = if palette.contains_key(raw.as_str()) {
        resolve_value(palette, raw, resolved, chain)?
    } else {
        raw.clone()
    };
    resolved.insert(key.to_string(), value.clone());
    // Pop so sibling branches start from a clean chain.
    chain.pop();

    Ok(value)
}
