//! Shared fixtures for the end-to-end pipeline tests: a pair of
//! Modus-like palettes (light and dark, with alias chains) and full
//! mappings for both built-in tool specs.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

pub const ANSI_SLOT_KEYS: [&str; 16] = [
    "bg-main", "red", "green", "yellow", "blue", "magenta", "cyan", "fg-dim", "bg-active",
    "red-warmer", "green-warmer", "yellow-warmer", "blue-warmer", "magenta-warmer", "cyan-warmer",
    "fg-main",
];

fn palette_colors(light: bool) -> serde_json::Value {
    let (bg, fg) = if light {
        ("#ffffff", "#000000")
    } else {
        ("#000000", "#ffffff")
    };
    json!({
        "bg-main": bg,
        "fg-main": fg,
        "fg-dim": if light { "#595959" } else { "#989898" },
        "bg-active": if light { "#c4c4c4" } else { "#535353" },
        "bg-region": if light { "#bdbdbd" } else { "#5a5a5a" },
        "red": if light { "#a60000" } else { "#ff5f59" },
        "green": if light { "#006800" } else { "#44bc44" },
        "yellow": if light { "#6f5500" } else { "#d0bc00" },
        "blue": if light { "#0031a9" } else { "#2fafff" },
        "magenta": if light { "#721045" } else { "#feacd0" },
        "cyan": if light { "#005e8b" } else { "#00d3d0" },
        "red-warmer": if light { "#972500" } else { "#ff6b55" },
        "green-warmer": if light { "#316500" } else { "#00c06f" },
        "yellow-warmer": if light { "#884900" } else { "#fec43f" },
        "blue-warmer": if light { "#354fcf" } else { "#79a8ff" },
        "magenta-warmer": if light { "#8f0075" } else { "#f78fe7" },
        "cyan-warmer": if light { "#3f578f" } else { "#6ae4b9" },
        // Alias chains, resolved before rendering.
        "cursor": "blue",
        "border": "fg-dim",
        "bg-hl-line": "bg-active",
        "bg-paren-match": "bg-region"
    })
}

/// Write the two palette files (one bare, one named envelope) and
/// return the palettes directory.
pub fn write_palettes(root: &Path) -> PathBuf {
    let palettes = root.join("palettes");
    fs::create_dir(&palettes).unwrap();
    fs::write(
        palettes.join("modus-operandi.json"),
        palette_colors(true).to_string(),
    )
    .unwrap();
    let named = json!({
        "name": "modus-vivendi",
        "palette": palette_colors(false)
    });
    fs::write(palettes.join("modus-vivendi.json"), named.to_string()).unwrap();
    palettes
}

pub fn write_ghostty_mapping(root: &Path) -> PathBuf {
    let slots: serde_json::Map<String, serde_json::Value> = ANSI_SLOT_KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| (i.to_string(), json!(key)))
        .collect();
    let mapping = json!({
        "background": "bg-main",
        "foreground": "fg-main",
        "cursor-color": "cursor",
        "selection-background": "bg-region",
        "selection-foreground": "fg-main",
        "palette": slots
    });
    let path = root.join("ghostty-mapping.json");
    fs::write(&path, mapping.to_string()).unwrap();
    path
}

pub fn write_lazygit_mapping(root: &Path) -> PathBuf {
    let mapping = json!({
        "authorColor": "cyan",
        "activeBorderColor": ["blue", "bold"],
        "inactiveBorderColor": ["fg-dim"],
        "searchingActiveBorderColor": ["magenta", "bold"],
        "optionsTextColor": ["blue"],
        "selectedLineBgColor": ["bg-hl-line"],
        "inactiveViewSelectedLineBgColor": ["bg-hl-line"],
        "cherryPickedCommitFgColor": ["blue"],
        "cherryPickedCommitBgColor": ["bg-paren-match"],
        "markedBaseCommitFgColor": ["blue"],
        "markedBaseCommitBgColor": ["yellow"],
        "unstagedChangesColor": ["red"],
        "defaultFgColor": ["fg-main"]
    });
    let path = root.join("lazygit-mapping.json");
    fs::write(&path, mapping.to_string()).unwrap();
    path
}
