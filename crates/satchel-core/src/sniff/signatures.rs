//! Magic-number table for binary formats.

use super::media;

/// ZIP local file header signature (`PK\x03\x04`).
pub const ZIP_LOCAL_HEADER: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// ZIP end of central directory signature (`PK\x05\x06`).
///
/// An archive with no entries consists of this record alone.
pub const ZIP_END_OF_DIRECTORY: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

/// ZIP spanned archive marker (`PK\x07\x08`).
pub const ZIP_SPANNED: [u8; 4] = [0x50, 0x4B, 0x07, 0x08];

/// A byte pattern expected at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    /// Offset of the pattern from the start of the stream.
    pub offset: usize,
    /// Bytes expected at `offset`.
    pub magic: &'static [u8],
    /// Media type reported on a match.
    pub media_type: &'static str,
}

impl Signature {
    const fn at_start(magic: &'static [u8], media_type: &'static str) -> Self {
        Self {
            offset: 0,
            magic,
            media_type,
        }
    }

    /// Returns `true` if `prefix` carries this signature.
    #[inline]
    pub fn matches(&self, prefix: &[u8]) -> bool {
        prefix
            .get(self.offset..self.offset + self.magic.len())
            .is_some_and(|window| window == self.magic)
    }
}

/// Binary signatures checked in order; the first match wins.
///
/// ZIP is absent here because it needs refinement (see `classify_zip`).
pub const BINARY_SIGNATURES: &[Signature] = &[
    Signature::at_start(b"%PDF-", media::PDF),
    Signature::at_start(b"%!PS-Adobe-", media::POSTSCRIPT),
    Signature::at_start(b"\x89PNG\r\n\x1a\n", media::PNG),
    Signature::at_start(&[0xFF, 0xD8, 0xFF], media::JPEG),
    Signature::at_start(b"GIF87a", media::GIF),
    Signature::at_start(b"GIF89a", media::GIF),
    Signature::at_start(b"BM", media::BMP),
    Signature {
        offset: 8,
        magic: b"WEBPVP",
        media_type: media::WEBP,
    },
    Signature::at_start(&[0x00, 0x00, 0x01, 0x00], media::ICO),
    Signature::at_start(&[0x1F, 0x8B, 0x08], media::GZIP),
    Signature::at_start(b"BZh", media::BZIP2),
    Signature::at_start(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], media::SEVEN_Z),
    Signature::at_start(b"Rar!\x1A\x07", media::RAR),
    Signature::at_start(b"OggS\x00", media::OGG),
    Signature::at_start(b"ID3", media::MP3),
    Signature::at_start(b"\x00asm", media::WASM),
    Signature::at_start(b"{\\rtf1", media::RTF),
];

/// Returns `true` if `prefix` starts with any ZIP record signature.
#[inline]
pub fn is_zip(prefix: &[u8]) -> bool {
    [ZIP_LOCAL_HEADER, ZIP_END_OF_DIRECTORY, ZIP_SPANNED]
        .iter()
        .any(|sig| prefix.starts_with(sig))
}

/// Classifies a ZIP prefix, refining to an OOXML type when a part folder
/// name is visible in the prefix.
///
/// Only local headers that fall inside the prefix can be seen, so an office
/// document whose first parts are large stays `application/zip`.
pub fn classify_zip(prefix: &[u8]) -> &'static str {
    const PARTS: [(&[u8], &str); 3] = [
        (b"word/", media::DOCX),
        (b"xl/", media::XLSX),
        (b"ppt/", media::PPTX),
    ];

    PARTS
        .iter()
        .find(|(folder, _)| contains(prefix, folder))
        .map_or(media::ZIP, |(_, media_type)| *media_type)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Returns the media type of the first binary signature matching `prefix`.
pub fn match_binary(prefix: &[u8]) -> Option<&'static str> {
    BINARY_SIGNATURES
        .iter()
        .find(|sig| sig.matches(prefix))
        .map(|sig| sig.media_type)
}
