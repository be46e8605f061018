mod common;

use std::fs;

use tinct::{lookup, render_all, validate_all};

#[test]
fn renders_both_variants_and_validates_clean() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_ghostty_mapping(dir.path());
    let out_dir = dir.path().join("themes");
    let spec = lookup("ghostty").unwrap();

    let written = render_all(&palettes, &mapping, &out_dir, spec, None).unwrap();
    assert_eq!(
        written,
        vec![out_dir.join("modus-operandi"), out_dir.join("modus-vivendi")]
    );

    let operandi = fs::read_to_string(&written[0]).unwrap();
    assert!(operandi.starts_with("background = #ffffff\n"));
    // The cursor alias resolved to the blue it points at.
    assert!(operandi.contains("cursor-color = #0031a9"));
    assert!(operandi.contains("palette = 0=#ffffff"));
    assert!(operandi.contains("palette = 15=#000000"));
    assert!(operandi.ends_with('\n'));

    let (validated, errors) = validate_all(&out_dir, spec, None).unwrap();
    assert_eq!(validated, 2);
    assert!(errors.is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_ghostty_mapping(dir.path());
    let spec = lookup("ghostty").unwrap();

    let first_dir = dir.path().join("first");
    let second_dir = dir.path().join("second");
    render_all(&palettes, &mapping, &first_dir, spec, None).unwrap();
    render_all(&palettes, &mapping, &second_dir, spec, None).unwrap();

    for theme in ["modus-operandi", "modus-vivendi"] {
        let first = fs::read(first_dir.join(theme)).unwrap();
        let second = fs::read(second_dir.join(theme)).unwrap();
        assert_eq!(first, second, "non-deterministic render for {theme}");
    }
}

#[test]
fn validation_flags_truncated_output() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_ghostty_mapping(dir.path());
    let out_dir = dir.path().join("themes");
    let spec = lookup("ghostty").unwrap();
    render_all(&palettes, &mapping, &out_dir, spec, None).unwrap();

    // Cut the palette block off one theme.
    let path = out_dir.join("modus-vivendi");
    let text = fs::read_to_string(&path).unwrap();
    let truncated: String = text
        .lines()
        .filter(|line| !line.starts_with("palette"))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, truncated).unwrap();

    let (validated, errors) = validate_all(&out_dir, spec, None).unwrap();
    assert_eq!(validated, 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, path);
    assert_eq!(
        errors[0].1,
        vec!["Missing palette indices: 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15"]
    );
}

#[test]
fn cross_tool_validation_rejects_foreign_format() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = common::write_palettes(dir.path());
    let mapping = common::write_lazygit_mapping(dir.path());
    let out_dir = dir.path().join("themes");
    render_all(&palettes, &mapping, &out_dir, lookup("lazygit").unwrap(), None).unwrap();

    let (validated, errors) = validate_all(&out_dir, lookup("ghostty").unwrap(), None).unwrap();
    assert_eq!(validated, 0);
    assert_eq!(errors.len(), 2);
}
