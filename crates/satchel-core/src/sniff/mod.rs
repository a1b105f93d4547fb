//! Content sniffing: media type classification from a byte prefix.
//!
//! Classification never looks at file names or declared headers, only at
//! the first bytes of a stream. Callers read a bounded prefix with
//! [`read_prefix`], classify it, and rewind the stream before handing it to
//! the next consumer.
//!
//! # Examples
//!
//! ```
//! use satchel_core::sniff;
//!
//! assert_eq!(sniff::classify(b"\x89PNG\r\n\x1a\n...."), "image/png");
//! assert_eq!(sniff::classify(b"plain words"), "text/plain");
//! assert!(sniff::is_container_format(b"PK\x05\x06"));
//! assert!(!sniff::is_container_format(b"%PDF-1.7"));
//! ```

pub mod signatures;
mod text;

use std::io::Read;

use crate::ArchiveError;
use crate::Result;

/// Number of bytes read from a stream for classification.
pub const SNIFF_LEN: usize = 512;

/// Smallest prefix accepted for the container pre-check.
pub const MIN_CONTAINER_PROBE_LEN: usize = 261;

/// Largest prefix a caller may ask to sniff.
pub const MAX_SNIFF_LEN: usize = 64 * 1024;

/// Media type strings reported by the sniffer.
pub mod media {
    /// ZIP container.
    pub const ZIP: &str = "application/zip";
    /// Word document (OOXML).
    pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    /// Excel workbook (OOXML).
    pub const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    /// PowerPoint presentation (OOXML).
    pub const PPTX: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation";
    /// PDF document.
    pub const PDF: &str = "application/pdf";
    /// PostScript document.
    pub const POSTSCRIPT: &str = "application/postscript";
    /// XML document.
    pub const XML: &str = "application/xml";
    /// XML document, legacy text type.
    pub const TEXT_XML: &str = "text/xml";
    /// HTML document.
    pub const HTML: &str = "text/html";
    /// Plain text.
    pub const TEXT: &str = "text/plain";
    /// Rich text.
    pub const RTF: &str = "application/rtf";
    /// PNG image.
    pub const PNG: &str = "image/png";
    /// JPEG image.
    pub const JPEG: &str = "image/jpeg";
    /// GIF image.
    pub const GIF: &str = "image/gif";
    /// BMP image.
    pub const BMP: &str = "image/bmp";
    /// WebP image.
    pub const WEBP: &str = "image/webp";
    /// Windows icon.
    pub const ICO: &str = "image/x-icon";
    /// gzip stream.
    pub const GZIP: &str = "application/gzip";
    /// bzip2 stream.
    pub const BZIP2: &str = "application/x-bzip2";
    /// 7z archive.
    pub const SEVEN_Z: &str = "application/x-7z-compressed";
    /// RAR archive.
    pub const RAR: &str = "application/vnd.rar";
    /// Ogg container.
    pub const OGG: &str = "application/ogg";
    /// MP3 audio with ID3 tag.
    pub const MP3: &str = "audio/mpeg";
    /// WebAssembly module.
    pub const WASM: &str = "application/wasm";
    /// Anything unrecognized.
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Classifies a byte prefix into a media type.
///
/// Binary signatures are checked first, then markup, then a plain-text
/// heuristic. Short prefixes give a best-effort answer; the empty prefix is
/// `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use satchel_core::sniff::classify;
/// use satchel_core::sniff::media;
///
/// assert_eq!(classify(b"%PDF-1.4\n"), media::PDF);
/// assert_eq!(classify(b"<?xml version=\"1.0\"?><root/>"), media::XML);
/// assert_eq!(classify(&[0x00, 0x01, 0x02]), media::OCTET_STREAM);
/// assert_eq!(classify(b""), media::OCTET_STREAM);
/// ```
pub fn classify(prefix: &[u8]) -> &'static str {
    if prefix.is_empty() {
        return media::OCTET_STREAM;
    }
    if signatures::is_zip(prefix) {
        return signatures::classify_zip(prefix);
    }
    if let Some(media_type) = signatures::match_binary(prefix) {
        return media_type;
    }
    text::classify_text(prefix).unwrap_or(media::OCTET_STREAM)
}

/// Returns `true` if the prefix starts with a ZIP container signature.
///
/// This is the gate in front of structural parsing: anything it rejects is
/// never handed to the ZIP reader.
pub fn is_container_format(prefix: &[u8]) -> bool {
    signatures::is_zip(prefix)
}

/// Checks a configured sniff length against
/// `MIN_CONTAINER_PROBE_LEN..=MAX_SNIFF_LEN`.
///
/// # Errors
///
/// Returns `InvalidSniffLength` for a length outside the range.
///
/// # Examples
///
/// ```
/// use satchel_core::sniff;
///
/// assert!(sniff::validate_sniff_len(sniff::SNIFF_LEN).is_ok());
/// assert!(sniff::validate_sniff_len(0).is_err());
/// assert!(sniff::validate_sniff_len(usize::MAX).is_err());
/// ```
pub fn validate_sniff_len(len: usize) -> Result<()> {
    if !(MIN_CONTAINER_PROBE_LEN..=MAX_SNIFF_LEN).contains(&len) {
        return Err(ArchiveError::InvalidSniffLength {
            len,
            min: MIN_CONTAINER_PROBE_LEN,
            max: MAX_SNIFF_LEN,
        });
    }
    Ok(())
}

/// Reads at most `limit` bytes from `reader`.
///
/// Short reads are retried until `limit` bytes are collected or the reader
/// reports end of stream. The buffer grows with the data actually read, so
/// a large `limit` on a short stream costs only the stream's length.
///
/// # Errors
///
/// Returns any non-interrupt error from the underlying reader.
///
/// # Examples
///
/// ```
/// use satchel_core::sniff::read_prefix;
/// use std::io::Cursor;
///
/// let mut data = Cursor::new(vec![7u8; 2048]);
/// let prefix = read_prefix(&mut data, 512)?;
/// assert_eq!(prefix.len(), 512);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn read_prefix<R: Read + ?Sized>(reader: &mut R, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit.min(SNIFF_LEN));
    reader.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
