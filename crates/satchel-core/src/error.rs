//! Error types for archive inspection and construction.

use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Represents a specific limit that was exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaResource {
    /// Too many entries in the container directory.
    EntryCount {
        /// Entry count that triggered the limit.
        current: usize,
        /// Maximum allowed entry count.
        max: usize,
    },
    /// Sum of uncompressed entry sizes exceeded the limit.
    TotalSize {
        /// Running total in bytes.
        current: u64,
        /// Maximum allowed total in bytes.
        max: u64,
    },
    /// A single candidate file is larger than allowed.
    FileSize {
        /// Name of the offending file.
        name: String,
        /// Declared file size in bytes.
        size: u64,
        /// Maximum allowed file size in bytes.
        max: u64,
    },
}

impl std::fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryCount { current, max } => {
                write!(f, "quota exceeded: entry count ({current} > {max})")
            }
            Self::TotalSize { current, max } => {
                write!(f, "quota exceeded: total size ({current} > {max})")
            }
            Self::FileSize { name, size, max } => {
                write!(f, "quota exceeded: file '{name}' size ({size} > {max})")
            }
        }
    }
}

/// Errors that can occur while inspecting or building an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Underlying read, write or seek failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input does not start with a recognized container signature.
    #[error("not a ZIP archive")]
    NotAnArchive,

    /// Container signature matched but the structure could not be read.
    #[error("corrupt archive: {reason}")]
    CorruptArchive {
        /// What failed to parse.
        reason: String,
    },

    /// A candidate file's sniffed media type is not on the allow-list.
    #[error("unsupported media type '{media_type}' for file '{name}'")]
    UnsupportedMediaType {
        /// Name of the rejected file.
        name: String,
        /// Media type the sniffer assigned to it.
        media_type: String,
    },

    /// Archive construction was requested without any files.
    #[error("no files to archive")]
    EmptyInput,

    /// Two candidate files share the same entry name.
    ///
    /// Names are written verbatim and never renamed; the ZIP writer refuses
    /// a second entry under a name it has already written.
    #[error("duplicate entry name '{name}'")]
    DuplicateEntryName {
        /// The repeated name.
        name: String,
    },

    /// A configured limit was exceeded.
    #[error("{resource}")]
    QuotaExceeded {
        /// Description of the exceeded resource.
        resource: QuotaResource,
    },

    /// Compression level outside `0..=9`.
    #[error("invalid compression level {level}, must be 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Sniff length outside the accepted range.
    #[error("invalid sniff length {len}, must be between {min} and {max}")]
    InvalidSniffLength {
        /// The rejected length.
        len: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },
}

impl ArchiveError {
    /// Creates a `CorruptArchive` error from any displayable reason.
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptArchive {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error was caused by the input or configuration
    /// rather than by the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use satchel_core::ArchiveError;
    ///
    /// assert!(ArchiveError::NotAnArchive.is_input_error());
    /// assert!(ArchiveError::EmptyInput.is_input_error());
    ///
    /// let io = std::io::Error::other("disk full");
    /// assert!(!ArchiveError::Io(io).is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Returns the name of the file the error refers to, if any.
    #[must_use]
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            Self::UnsupportedMediaType { name, .. } | Self::DuplicateEntryName { name } => {
                Some(name)
            }
            Self::QuotaExceeded {
                resource: QuotaResource::FileSize { name, .. },
            } => Some(name),
            _ => None,
        }
    }

    /// Returns the quota resource that was exceeded, if applicable.
    #[must_use]
    pub const fn quota_resource(&self) -> Option<&QuotaResource> {
        match self {
            Self::QuotaExceeded { resource } => Some(resource),
            _ => None,
        }
    }
}

/// Maps a `zip` crate error onto the archive taxonomy.
///
/// Truncation surfaces from the zip crate as `UnexpectedEof`; that is a
/// property of the input, so it becomes `CorruptArchive` like any other
/// structural failure. Other I/O failures stay `Io`.
pub(crate) fn from_zip(err: zip::result::ZipError, context: &str) -> ArchiveError {
    match err {
        zip::result::ZipError::Io(io) if io.kind() != std::io::ErrorKind::UnexpectedEof => {
            ArchiveError::Io(io)
        }
        other => ArchiveError::corrupt(format!("{context}: {other}")),
    }
}
