//! Configuration for archive inspection.

use crate::Result;
use crate::sniff::SNIFF_LEN;
use crate::sniff::validate_sniff_len;

/// What the reader does when an entry's content cannot be opened or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryFailurePolicy {
    /// Fail the whole inspection with `CorruptArchive`. No partial report.
    #[default]
    Abort,
    /// Log a warning and leave the entry out of the report.
    Skip,
}

/// Configuration for [`ArchiveReader`](crate::ArchiveReader).
///
/// # Examples
///
/// ```
/// use satchel_core::EntryFailurePolicy;
/// use satchel_core::InspectConfig;
///
/// let config = InspectConfig::default()
///     .with_max_entries(500)
///     .with_entry_failure_policy(EntryFailurePolicy::Skip);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Bytes read from the archive and from each entry for sniffing.
    ///
    /// Must be at least `MIN_CONTAINER_PROBE_LEN`. Default: 512.
    pub sniff_len: usize,

    /// Maximum number of entries enumerated before failing.
    ///
    /// Default: 10,000.
    pub max_entries: usize,

    /// Maximum sum of stored uncompressed sizes. `None` means no limit.
    ///
    /// Default: `None`.
    pub max_total_size: Option<u64>,

    /// Handling of entries whose content stream cannot be read.
    ///
    /// Default: [`EntryFailurePolicy::Abort`].
    pub on_entry_failure: EntryFailurePolicy,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            sniff_len: SNIFF_LEN,
            max_entries: 10_000,
            max_total_size: None,
            on_entry_failure: EntryFailurePolicy::Abort,
        }
    }
}

impl InspectConfig {
    /// Creates a new `InspectConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sniff length.
    #[must_use]
    pub fn with_sniff_len(mut self, len: usize) -> Self {
        self.sniff_len = len;
        self
    }

    /// Sets the maximum entry count.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    /// Sets the maximum total uncompressed size.
    #[must_use]
    pub fn with_max_total_size(mut self, max: Option<u64>) -> Self {
        self.max_total_size = max;
        self
    }

    /// Sets the unreadable-entry policy.
    #[must_use]
    pub fn with_entry_failure_policy(mut self, policy: EntryFailurePolicy) -> Self {
        self.on_entry_failure = policy;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSniffLength` if `sniff_len` is outside
    /// `MIN_CONTAINER_PROBE_LEN..=MAX_SNIFF_LEN`.
    pub fn validate(&self) -> Result<()> {
        validate_sniff_len(self.sniff_len)
    }
}
