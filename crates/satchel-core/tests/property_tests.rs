//! Property-based tests for sniffing, inspection and construction.
//!
//! These tests use proptest to generate arbitrary inputs and verify the
//! pipeline's invariants hold across a wide range of cases.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use satchel_core::ArchiveError;
use satchel_core::ArchiveReader;
use satchel_core::ArchiveWriter;
use satchel_core::BuildConfig;
use satchel_core::CandidateFile;
use satchel_core::sniff;
use std::io::Cursor;

fn text_files(contents: &[String]) -> Vec<CandidateFile<Cursor<Vec<u8>>>> {
    contents
        .iter()
        .enumerate()
        .map(|(i, text)| {
            CandidateFile::from_bytes(format!("file_{i:03}.txt"), text.clone().into_bytes())
        })
        .collect()
}

proptest! {
    /// Classification never panics and always yields a media type.
    #[test]
    fn prop_classify_total(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let media_type = sniff::classify(&bytes);
        prop_assert!(media_type.contains('/'));
    }

    /// Anything that does not start with `PK` is never parsed as a container.
    #[test]
    fn prop_non_pk_prefix_not_an_archive(
        bytes in prop::collection::vec(any::<u8>(), 0..600)
            .prop_filter("must not start with PK", |b| !b.starts_with(b"PK"))
    ) {
        prop_assert!(!sniff::is_container_format(&bytes));
        let size = bytes.len() as u64;
        let result = ArchiveReader::default().inspect("random.bin", size, Cursor::new(bytes));
        prop_assert!(matches!(result, Err(ArchiveError::NotAnArchive)));
    }

    /// Built archives inspect back to the same names, order and sizes.
    #[test]
    fn prop_build_inspect_round_trip(
        contents in prop::collection::vec("[a-z][a-zA-Z0-9 .,\n]{0,199}", 1..12),
        level in 0u8..=9,
    ) {
        let writer = ArchiveWriter::new(BuildConfig::default().with_compression_level(level));
        let built = writer.build(text_files(&contents)).expect("build should succeed");
        let size = built.byte_size();

        let report = ArchiveReader::default()
            .inspect("bundle.zip", size, Cursor::new(built.into_bytes()))
            .expect("inspect should succeed");

        prop_assert_eq!(report.entry_count(), contents.len());
        prop_assert_eq!(report.entries().len(), report.entry_count());
        let expected_total: u64 = contents.iter().map(|c| c.len() as u64).sum();
        prop_assert_eq!(report.total_uncompressed_size(), expected_total);

        for (i, (entry, text)) in report.entries().iter().zip(&contents).enumerate() {
            prop_assert_eq!(&entry.path, &format!("file_{i:03}.txt"));
            prop_assert_eq!(entry.uncompressed_size, text.len() as u64);
            prop_assert_eq!(entry.media_type.as_str(), "text/plain");
        }
    }

    /// Inspecting the same bytes twice gives equal reports.
    #[test]
    fn prop_inspection_idempotent(
        contents in prop::collection::vec("[a-z]{1,64}", 1..6),
    ) {
        let built = ArchiveWriter::default().build(text_files(&contents)).unwrap();
        let size = built.byte_size();
        let reader = ArchiveReader::default();

        let first = reader.inspect("a.zip", size, Cursor::new(built.bytes().to_vec())).unwrap();
        let second = reader.inspect("a.zip", size, Cursor::new(built.bytes().to_vec())).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Content with a NUL byte is never text, and the writer follows the
    /// allow-list for whatever it is.
    #[test]
    fn prop_writer_follows_allow_list(
        head in "[a-z]{0,32}",
        tail in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = head.into_bytes();
        bytes.push(0x00);
        bytes.extend(tail);

        let media_type = sniff::classify(&bytes);
        prop_assert_ne!(media_type, "text/plain");
        let result = ArchiveWriter::default()
            .build(vec![CandidateFile::from_bytes("blob", bytes)]);
        if BuildConfig::default().allows(media_type) {
            prop_assert!(result.is_ok());
        } else {
            let is_unsupported = matches!(result, Err(ArchiveError::UnsupportedMediaType { .. }));
            prop_assert!(is_unsupported);
        }
    }
}
