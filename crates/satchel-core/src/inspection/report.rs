//! Inspection result types.

/// One entry of an inspected archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored in the container. May contain `/` separators.
    pub path: String,
    /// Uncompressed size from the central directory.
    pub uncompressed_size: u64,
    /// Media type sniffed from the entry's first bytes.
    pub media_type: String,
}

impl ArchiveEntry {
    /// Returns `true` if the stored name denotes a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.path.ends_with('/') || self.path.ends_with('\\')
    }
}

/// Result of inspecting one archive.
///
/// Totals are maintained by [`push`](Self::push), so `entry_count()` always
/// equals `entries().len()` and `total_uncompressed_size()` always equals the
/// sum of entry sizes.
///
/// # Examples
///
/// ```
/// use satchel_core::ArchiveEntry;
/// use satchel_core::ArchiveReport;
///
/// let mut report = ArchiveReport::new("upload.zip", 120);
/// report.push(ArchiveEntry {
///     path: "a.txt".into(),
///     uncompressed_size: 10,
///     media_type: "text/plain".into(),
/// });
/// report.push(ArchiveEntry {
///     path: "b.png".into(),
///     uncompressed_size: 32,
///     media_type: "image/png".into(),
/// });
///
/// assert_eq!(report.entry_count(), 2);
/// assert_eq!(report.total_uncompressed_size(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    source_name: String,
    archive_size: u64,
    total_uncompressed_size: u64,
    entries: Vec<ArchiveEntry>,
}

impl ArchiveReport {
    /// Creates an empty report for an archive of `archive_size` bytes.
    #[must_use]
    pub fn new(source_name: impl Into<String>, archive_size: u64) -> Self {
        Self {
            source_name: source_name.into(),
            archive_size,
            total_uncompressed_size: 0,
            entries: Vec::new(),
        }
    }

    /// Appends an entry and updates the totals.
    pub fn push(&mut self, entry: ArchiveEntry) {
        self.total_uncompressed_size = self
            .total_uncompressed_size
            .saturating_add(entry.uncompressed_size);
        self.entries.push(entry);
    }

    /// Display name of the inspected archive.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Archive size in bytes, as declared by the caller.
    #[must_use]
    pub fn archive_size(&self) -> u64 {
        self.archive_size
    }

    /// Sum of all entries' uncompressed sizes.
    #[must_use]
    pub fn total_uncompressed_size(&self) -> u64 {
        self.total_uncompressed_size
    }

    /// Number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in central directory order.
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
