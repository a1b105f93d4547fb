//! Test helpers for building in-memory archives and fixture payloads.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Smallest useful PNG prefix: signature plus IHDR chunk.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89";

/// JPEG SOI marker followed by a JFIF APP0 segment.
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

/// Creates an in-memory ZIP archive with stored (uncompressed) entries.
///
/// Names ending in `/` become directory entries.
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (path, data) in entries {
        if path.ends_with('/') {
            zip.add_directory(*path, options).unwrap();
        } else {
            zip.start_file(*path, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// Creates a valid ZIP archive with no entries.
pub fn empty_zip() -> Vec<u8> {
    ZipWriter::new(Cursor::new(Vec::new()))
        .finish()
        .unwrap()
        .into_inner()
}

/// Breaks the local file header signature of the `n`th entry (0-based).
///
/// The central directory stays intact, so the archive still opens and only
/// that entry's content stream fails.
pub fn corrupt_local_header(mut data: Vec<u8>, n: usize) -> Vec<u8> {
    let offset = data
        .windows(4)
        .enumerate()
        .filter(|(_, w)| *w == b"PK\x03\x04")
        .map(|(i, _)| i)
        .nth(n)
        .unwrap();
    data[offset..offset + 2].copy_from_slice(b"XX");
    data
}
