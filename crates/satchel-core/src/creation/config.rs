//! Configuration for archive construction.

use crate::ArchiveError;
use crate::Result;
use crate::sniff::SNIFF_LEN;
use crate::sniff::media;
use crate::sniff::validate_sniff_len;

/// Media types accepted into a newly built archive by default.
pub const DEFAULT_ALLOWED_MEDIA_TYPES: &[&str] = &[
    media::DOCX,
    media::XML,
    media::TEXT_XML,
    media::TEXT,
    media::JPEG,
    media::PNG,
    media::PDF,
];

/// Configuration for [`ArchiveWriter`](crate::ArchiveWriter).
///
/// # Examples
///
/// ```
/// use satchel_core::BuildConfig;
///
/// let config = BuildConfig::default()
///     .with_compression_level(9)
///     .with_max_file_size(Some(10 * 1024 * 1024));
/// assert!(config.validate().is_ok());
/// assert!(config.allows("image/png"));
/// assert!(!config.allows("application/zip"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Media types a candidate file may sniff as.
    ///
    /// Default: [`DEFAULT_ALLOWED_MEDIA_TYPES`].
    pub allowed_media_types: Vec<String>,

    /// Compression level (0-9).
    ///
    /// `0` stores entries uncompressed, `1` to `9` deflate.
    ///
    /// Default: 6.
    pub compression_level: u8,

    /// Largest declared size accepted for a single file. `None` means no
    /// limit.
    ///
    /// Default: `None`.
    pub max_file_size: Option<u64>,

    /// Bytes read from each file for sniffing.
    ///
    /// Default: 512.
    pub sniff_len: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            allowed_media_types: DEFAULT_ALLOWED_MEDIA_TYPES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            compression_level: 6,
            max_file_size: None,
            sniff_len: SNIFF_LEN,
        }
    }
}

impl BuildConfig {
    /// Creates a new `BuildConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the allow-list.
    #[must_use]
    pub fn with_allowed_media_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_media_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the compression level.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Sets the maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, max: Option<u64>) -> Self {
        self.max_file_size = max;
        self
    }

    /// Sets the sniff length.
    #[must_use]
    pub fn with_sniff_len(mut self, len: usize) -> Self {
        self.sniff_len = len;
        self
    }

    /// Returns `true` if `media_type` is on the allow-list.
    #[must_use]
    pub fn allows(&self, media_type: &str) -> bool {
        self.allowed_media_types.iter().any(|t| t == media_type)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidCompressionLevel` if the level is above 9
    /// - `InvalidSniffLength` if `sniff_len` is outside
    ///   `MIN_CONTAINER_PROBE_LEN..=MAX_SNIFF_LEN`
    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            return Err(ArchiveError::InvalidCompressionLevel {
                level: self.compression_level,
            });
        }
        validate_sniff_len(self.sniff_len)
    }
}
