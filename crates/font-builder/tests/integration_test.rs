//! End-to-end FRF compilation tests.

use font_builder::{
    Error, FontCompiler, compile_font,
    frf::{CDAT, CMAP, META},
    parse_char_map,
};
use gm9_riff::ContainerRef;

/// Build a raw PBM from packed row bytes.
fn make_pbm(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut data = format!("P4\n# test sheet\n{width} {height}\n").into_bytes();
    data.extend_from_slice(pixels);
    data
}

fn cmap_codepoints(font: &[u8]) -> Vec<u16> {
    let container = ContainerRef::parse(font).unwrap();
    let meta = container.find(META).unwrap();
    let count = u16::from_le_bytes([meta.data[2], meta.data[3]]) as usize;
    container.find(CMAP).unwrap().data[..count * 2]
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect()
}

#[test]
fn test_single_tile_layout() {
    let pbm = make_pbm(8, 1, &[0xA5]);
    let font = compile_font(&pbm, 8, 1, None).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(b"RIFF\x24\0\0\0");
    expected.extend_from_slice(b"META\x04\0\0\0\x08\x01\x01\x00");
    expected.extend_from_slice(b"CDAT\x04\0\0\0\xA5\0\0\0");
    expected.extend_from_slice(b"CMAP\x04\0\0\0\0\0\0\0");
    assert_eq!(font, expected);
}

#[test]
fn test_tiles_across_byte_boundaries() {
    // 12x4 sheet of 6x2 tiles; rows are two bytes with four padding bits.
    let pixels = [0xFC, 0x00, 0x03, 0xF0, 0xA9, 0x50, 0xCC, 0xC0];
    let font = compile_font(&make_pbm(12, 4, &pixels), 6, 2, None).unwrap();

    let container = ContainerRef::parse(&font).unwrap();
    assert_eq!(container.find(META).unwrap().data, [6, 2, 4, 0]);
    assert_eq!(
        container.find(CDAT).unwrap().data,
        [0xFC, 0x00, 0x00, 0xFC, 0xA8, 0xCC, 0x54, 0x30]
    );
    assert_eq!(cmap_codepoints(&font), [0, 1, 2, 3]);
}

#[test]
fn test_duplicate_codepoint_keeps_last_tile() {
    let _ = env_logger::builder().is_test(true).try_init();

    let pbm = make_pbm(24, 1, &[0x11, 0x22, 0x33]);
    let font = FontCompiler::new(8, 1)
        .with_char_map(vec![0x41, 0x42, 0x41])
        .compile(&pbm)
        .unwrap();

    assert_eq!(font.glyphs, 2);
    assert_eq!(font.stats.duplicates_removed, 1);

    let container = ContainerRef::parse(&font.data).unwrap();
    assert_eq!(&container.find(CDAT).unwrap().data[..2], [0x33, 0x22]);
    assert_eq!(cmap_codepoints(&font.data), [0x41, 0x42]);
}

#[test]
fn test_cmap_strictly_increasing() {
    let map = parse_char_map("7A 20 41 FFFF 30").unwrap();
    let pbm = make_pbm(40, 1, &[1, 2, 3, 4, 5]);
    let font = compile_font(&pbm, 8, 1, Some(map)).unwrap();

    let codepoints = cmap_codepoints(&font);
    assert_eq!(codepoints, [0x20, 0x30, 0x41, 0x7A, 0xFFFF]);
    assert!(codepoints.windows(2).all(|w| w[0] < w[1]));

    // Row bytes follow the sorted order.
    let container = ContainerRef::parse(&font).unwrap();
    assert_eq!(&container.find(CDAT).unwrap().data[..5], [2, 5, 3, 1, 4]);
}

#[test]
fn test_map_longer_than_sheet_rejected() {
    let pbm = make_pbm(8, 1, &[0xFF]);
    let err = compile_font(&pbm, 4, 1, Some(vec![1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::MapTooLarge { map_len: 3, tiles: 2 }));
}

#[test]
fn test_dimension_limits_checked_before_input() {
    let garbage = b"not a bitmap";
    assert!(matches!(compile_font(garbage, 9, 8, None), Err(Error::WidthTooLarge(9))));
    assert!(matches!(compile_font(garbage, 8, 11, None), Err(Error::HeightTooLarge(11))));
    assert!(matches!(compile_font(garbage, 8, 10, None), Err(Error::NotPbm(_))));
}

#[test]
fn test_error_messages() {
    assert_eq!(Error::WidthTooLarge(9).to_string(), "font width too large: 9 (maximum is 8)");
    assert_eq!(Error::HeightTooLarge(11).to_string(), "font height too large: 11 (maximum is 10)");
    assert!(Error::NotPbm("missing P4 marker").to_string().starts_with("not a valid bitmap file"));
}

#[test]
fn test_deterministic_output() {
    let pbm = make_pbm(16, 10, &[0x5A; 20]);
    let build = || compile_font(&pbm, 8, 10, Some(vec![0x100, 0x20])).unwrap();
    assert_eq!(build(), build());
}

#[test]
fn test_all_lengths_aligned() {
    let pbm = make_pbm(24, 5, &[0xFF; 15]);
    let font = compile_font(&pbm, 8, 5, None).unwrap();
    let container = ContainerRef::parse(&font).unwrap();
    assert_eq!(container.size() % 4, 0);
    for chunk in container.chunks() {
        assert_eq!(chunk.len() % 4, 0, "{}", chunk.tag);
    }
    // 3 glyphs x 5 rows = 15 bytes, padded to 16.
    assert_eq!(container.find(CDAT).unwrap().len(), 16);
}
