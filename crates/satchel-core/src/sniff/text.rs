//! Markup and plain-text heuristics.

use super::media;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Tag openers that mark an HTML document. Matched case-insensitively and
/// must be followed by a space or `>`.
const HTML_OPENERS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Returns `true` for bytes that never appear in text.
///
/// Tab, line feed, form feed, carriage return and escape are allowed.
#[inline]
const fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Classifies a prefix with no binary signature as markup or text.
///
/// Returns `None` when the prefix contains binary bytes.
pub fn classify_text(prefix: &[u8]) -> Option<&'static str> {
    if prefix.starts_with(UTF16_BE_BOM) || prefix.starts_with(UTF16_LE_BOM) {
        return Some(media::TEXT);
    }

    let body = prefix.strip_prefix(UTF8_BOM).unwrap_or(prefix);
    let trimmed = trim_leading_whitespace(body);

    if trimmed.starts_with(b"<?xml") {
        return Some(media::XML);
    }
    if HTML_OPENERS.iter().any(|tag| is_html_opener(trimmed, tag)) {
        return Some(media::HTML);
    }

    if body.iter().copied().any(is_binary_byte) {
        None
    } else {
        Some(media::TEXT)
    }
}

fn trim_leading_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|&b| !matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn is_html_opener(data: &[u8], tag: &[u8]) -> bool {
    let Some(head) = data.get(..tag.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(tag) {
        return false;
    }
    // Comments need no terminator; tags must end at a space or '>'.
    if tag == b"<!--" {
        return true;
    }
    matches!(data.get(tag.len()), Some(&(b' ' | b'>')))
}
