//! Result of an archive construction.

use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::sniff::media;

/// A finished ZIP archive held in memory.
///
/// Ownership of the bytes moves to the caller, who decides where they go.
///
/// # Examples
///
/// ```
/// use satchel_core::ArchiveWriter;
/// use satchel_core::CandidateFile;
///
/// let files = vec![CandidateFile::from_bytes("notes.txt", b"meeting at noon".to_vec())];
/// let built = ArchiveWriter::default().build(files)?;
///
/// assert_eq!(built.entry_count(), 1);
/// assert_eq!(built.byte_size(), built.bytes().len() as u64);
/// assert_eq!(built.content_type(), "application/zip");
/// # Ok::<(), satchel_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BuiltArchive {
    bytes: Vec<u8>,
    entry_count: usize,
    total_uncompressed_size: u64,
    duration: Duration,
    created_at: u64,
}

impl BuiltArchive {
    pub(crate) fn new(
        bytes: Vec<u8>,
        entry_count: usize,
        total_uncompressed_size: u64,
        duration: Duration,
    ) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            bytes,
            entry_count,
            total_uncompressed_size,
            duration,
            created_at,
        }
    }

    /// Size of the finished container in bytes.
    #[must_use]
    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// The container bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the archive and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of entries written.
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Sum of the input sizes in bytes.
    #[must_use]
    pub const fn total_uncompressed_size(&self) -> u64 {
        self.total_uncompressed_size
    }

    /// Time spent building the archive.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Media type to deliver the bytes with.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        media::ZIP
    }

    /// Delivery filename of the form `archive-<unix-seconds>.zip`.
    #[must_use]
    pub fn suggested_filename(&self) -> String {
        format!("archive-{}.zip", self.created_at)
    }

    /// Ratio of input size to container size.
    ///
    /// Returns 0.0 for an empty container.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes.is_empty() {
            return 0.0;
        }
        self.total_uncompressed_size as f64 / self.bytes.len() as f64
    }
}
