//! Build-then-walk checks over the public framing API.

use gm9_riff::{Chunk, ContainerRef, ContainerWriter, Tag};

#[test]
fn test_every_length_field_is_aligned() {
    let mut writer = ContainerWriter::riff();
    for len in 0..9 {
        writer.push(Chunk::new(Tag::new(b"DATA"), vec![0xFF; len]).unwrap());
    }
    let data = writer.finish().unwrap();

    let container = ContainerRef::parse(&data).unwrap();
    assert_eq!(container.size() % 4, 0);
    assert_eq!(container.chunks().len(), 9);
    for (len, chunk) in container.chunks().iter().enumerate() {
        assert_eq!(chunk.len() % 4, 0);
        assert_eq!(&chunk.data[..len], vec![0xFF; len].as_slice());
        assert!(chunk.data[len..].iter().all(|&b| b == 0), "padding must be zero");
    }
}

#[test]
fn test_size_is_sum_of_chunk_frames() {
    let chunks = [
        Chunk::new(Tag::new(b"META"), vec![0; 40]).unwrap(),
        Chunk::new(Tag::new(b"SDAT"), vec![0; 3]).unwrap(),
        Chunk::new(Tag::new(b"SMAP"), vec![0; 2]).unwrap(),
    ];
    let expected: u32 = chunks.iter().map(|c| 8 + c.len()).sum();
    let data = gm9_riff::build_container(Tag::RIFF, chunks).unwrap();

    assert_eq!(expected, 72);
    assert_eq!(ContainerRef::parse(&data).unwrap().size(), expected);
    assert_eq!(data.len(), 80);
}
