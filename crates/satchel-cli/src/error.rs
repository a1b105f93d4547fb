//! Error conversion utilities for CLI.
//!
//! Converts satchel-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use satchel_core::ArchiveError;

/// Converts `ArchiveError` to a user-friendly anyhow error.
///
/// `subject` names what was being processed: the archive for `info`, the
/// output path for `bundle`.
pub fn convert_archive_error(err: ArchiveError, subject: &str) -> anyhow::Error {
    match err {
        ArchiveError::NotAnArchive => {
            anyhow!(
                "'{subject}' is not a ZIP archive\n\
                 HINT: Use `satchel sniff` to see what kind of file it is."
            )
        }
        ArchiveError::CorruptArchive { reason } => {
            anyhow!(
                "Corrupt archive '{subject}': {reason}\n\
                 HINT: The file may be truncated. Use --skip-unreadable to list the readable entries."
            )
        }
        ArchiveError::UnsupportedMediaType { name, media_type } => {
            anyhow!(
                "File '{name}' has unsupported type '{media_type}'\n\
                 HINT: Use --allow {media_type} to accept this type."
            )
        }
        ArchiveError::EmptyInput => anyhow!("No files to bundle into '{subject}'"),
        ArchiveError::DuplicateEntryName { name } => {
            anyhow!(
                "More than one input file is named '{name}'\n\
                 HINT: Entries are named after their files. Rename one of them."
            )
        }
        ArchiveError::QuotaExceeded { resource } => {
            anyhow!(
                "Limit exceeded for '{subject}': {resource}\n\
                 HINT: Use --max-entries, --max-total-size, or --max-file-size to raise limits."
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while processing '{subject}': {io_err}")
        }
        _ => anyhow::Error::from(err).context(format!("Error processing '{subject}'")),
    }
}

/// Adds context to a core result.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    subject: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, subject))
}
