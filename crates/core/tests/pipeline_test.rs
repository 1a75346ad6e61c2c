//! File-level pipeline tests.

use std::fs::{read, read_to_string, write};

use gm9_core::{
    AssetKind, FontJob, TranslationOptions, build_font, build_header, build_translation,
    build_translations, inspect,
};
use tempfile::tempdir;

const SHEET: &[u8] = b"P4\n# 4 tiles of 8x1\n32 1\n\x01\x02\x03\x04";
const ENGLISH: &str = r#"{"GM9_LANGUAGE": "English", "GM9_TRANS_VER": 3, "HELLO": "Hi"}"#;

#[test]
fn test_oversized_tiles_never_create_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("font.pbm");
    write(&input, SHEET).unwrap();

    for (width, height) in [(9, 8), (8, 11)] {
        let output = dir.path().join(format!("font_{width}x{height}.frf"));
        let err = build_font(&FontJob::new(&input, &output, width, height)).unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
        assert!(!output.exists());
    }
}

#[test]
fn test_invalid_sheet_never_creates_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("font.pbm");
    let output = dir.path().join("font.frf");
    write(&input, b"P1\n8 1\n1").unwrap();

    assert!(build_font(&FontJob::new(&input, &output, 8, 1)).is_err());
    assert!(!output.exists());
}

#[test]
fn test_map_next_to_sheet_is_used() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("font_8x1.pbm");
    let output = dir.path().join("font_8x1.frf");
    write(&input, SHEET).unwrap();
    write(dir.path().join("font_8x1.txt"), "41 42").unwrap();

    let font = build_font(&FontJob::new(&input, &output, 8, 1)).unwrap();
    assert_eq!(font.glyphs, 2);
    assert_eq!(font.stats.tiles_in_image, 4);
    assert_eq!(read(&output).unwrap(), font.data);
}

#[test]
fn test_explicit_map_wins() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("font.pbm");
    let output = dir.path().join("font.frf");
    let map = dir.path().join("custom.map");
    write(&input, SHEET).unwrap();
    write(dir.path().join("font.txt"), "41 42").unwrap();
    write(&map, "30 31 32").unwrap();

    let font = build_font(&FontJob::new(&input, &output, 8, 1).with_map(&map)).unwrap();
    assert_eq!(font.glyphs, 3);
}

#[test]
fn test_no_map_maps_tiles_in_order() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("font.pbm");
    let output = dir.path().join("nested/out/font.frf");
    write(&input, SHEET).unwrap();

    build_font(&FontJob::new(&input, &output, 8, 1)).unwrap();
    let report = inspect(&output).unwrap();
    assert_eq!(report.kind, AssetKind::Font { width: 8, height: 1, glyphs: 4 });
}

#[test]
fn test_translation_written() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("en.json");
    let dest = dir.path().join("en.trf");
    write(&source, ENGLISH).unwrap();

    let stats = build_translation(&source, &dest, &TranslationOptions::new()).unwrap();
    assert_eq!(stats.strings, 1);
    assert_eq!(read(&dest).unwrap().len(), 80);
}

#[test]
fn test_invalid_translation_never_creates_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("bad.json");
    let dest = dir.path().join("bad.trf");
    write(&source, r#"{"GM9_TRANS_VER": 3, "HELLO": "Hi"}"#).unwrap();

    let err = build_translation(&source, &dest, &TranslationOptions::new()).unwrap_err();
    assert!(format!("{err:#}").contains("missing language name"), "{err:#}");
    assert!(!dest.exists());
}

#[test]
fn test_version_mismatch_never_creates_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("en.json");
    let dest = dir.path().join("en.trf");
    write(&source, ENGLISH).unwrap();

    let options = TranslationOptions::new().with_expected_version(4);
    assert!(build_translation(&source, &dest, &options).is_err());
    assert!(!dest.exists());
}

#[test]
fn test_missing_source_names_path() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("missing.json");
    let err = build_translation(&source, &dir.path().join("x.trf"), &TranslationOptions::new())
        .unwrap_err();
    assert!(err.to_string().contains("missing.json"), "{err}");
}

#[test]
fn test_batch_translations() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("lang");
    let out = dir.path().join("out");
    std::fs::create_dir(&src).unwrap();
    write(src.join("en.json"), ENGLISH).unwrap();
    write(src.join("de.json"), r#"{"GM9_LANGUAGE": "Deutsch", "GM9_TRANS_VER": 3}"#).unwrap();
    write(src.join("broken.json"), "{").unwrap();
    write(src.join("notes.md"), "not a translation").unwrap();

    let result = build_translations(&src, "*.json", &out, &TranslationOptions::new()).unwrap();
    assert_eq!((result.succeeded, result.failed), (2, 1));
    assert!(result.ok_or_bail("Translations").is_err());
    assert!(out.join("en.trf").exists());
    assert!(out.join("de.trf").exists());
    assert!(!out.join("broken.trf").exists());
}

#[test]
fn test_header_written() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.json");
    let inl = dir.path().join("language.inl");
    write(
        &source,
        r#"{"GM9_LANGUAGE": "English", "GM9_TRANS_VER": 3, "HELLO": "Hi \"there\"", "BYE": "Bye"}"#,
    )
    .unwrap();

    build_header(&source, &inl).unwrap();
    assert_eq!(
        read_to_string(&inl).unwrap(),
        "#define TRANSLATION_VER 3\n\nSTRING(HELLO, \"Hi \\\"there\\\"\")\nSTRING(BYE, \"Bye\")\n"
    );
}
