mod common;

use std::fs;

use tinct::{lookup, render_all, validate_all};

#[test]
fn renders_theme_block_and_validates_clean() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_lazygit_mapping(dir.path());
    let out_dir = dir.path().join("themes");
    let spec = lookup("lazygit").unwrap();

    let written = render_all(&palettes, &mapping, &out_dir, spec, None).unwrap();
    assert_eq!(written.len(), 2);

    let vivendi = fs::read_to_string(out_dir.join("modus-vivendi")).unwrap();
    assert!(vivendi.starts_with("gui:\n  authorColors:\n    '*': \"#00d3d0\"\n  theme:\n"));
    // Hex values quoted, literal style words left bare.
    assert!(vivendi.contains("    activeBorderColor:\n      - \"#2fafff\"\n      - bold\n"));
    // The bg-hl-line alias resolved through to bg-active's color.
    assert!(vivendi.contains("    selectedLineBgColor:\n      - \"#535353\"\n"));

    let (validated, errors) = validate_all(&out_dir, spec, None).unwrap();
    assert_eq!(validated, 2);
    assert!(errors.is_empty());
}

#[test]
fn single_theme_filter_renders_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_lazygit_mapping(dir.path());
    let out_dir = dir.path().join("themes");
    let spec = lookup("lazygit").unwrap();

    let written =
        render_all(&palettes, &mapping, &out_dir, spec, Some("modus-operandi")).unwrap();
    assert_eq!(written, vec![out_dir.join("modus-operandi")]);
    assert!(!out_dir.join("modus-vivendi").exists());

    let (validated, errors) =
        validate_all(&out_dir, spec, Some("modus-operandi")).unwrap();
    assert_eq!(validated, 1);
    assert!(errors.is_empty());
}

#[test]
fn missing_mapping_entry_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let out_dir = dir.path().join("themes");

    // A mapping with only the author color: every theme key is absent.
    let mapping_path = dir.path().join("mapping.json");
    fs::write(&mapping_path, r#"{"authorColor": "cyan"}"#).unwrap();

    let err = render_all(
        &palettes,
        &mapping_path,
        &out_dir,
        lookup("lazygit").unwrap(),
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Missing mapping key: activeBorderColor"));
}

#[test]
fn validation_reports_missing_theme_keys() {
    let dir = tempfile::tempdir().unwrap();
    let themes = dir.path().join("themes");
    fs::create_dir(&themes).unwrap();
    fs::write(
        themes.join("modus-operandi"),
        "gui:\n  authorColors:\n    '*': default\n  theme:\n    defaultFgColor:\n      - default\n",
    )
    .unwrap();

    let (validated, errors) =
        validate_all(&themes, lookup("lazygit").unwrap(), None).unwrap();
    assert_eq!(validated, 0);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].1[0].starts_with("Missing keys: activeBorderColor,"));
}
