//! Upload archive inspection and construction.
//!
//! `satchel-core` answers two questions about uploaded files:
//!
//! - **What is in this archive?** [`ArchiveReader`] opens a ZIP container
//!   and lists every entry with its stored size and a media type sniffed
//!   from the entry's first bytes.
//! - **Can these files be bundled?** [`ArchiveWriter`] sniffs each candidate
//!   file, rejects anything outside an allow-list of media types and writes
//!   the rest into a new ZIP container in memory.
//!
//! Media types always come from content, never from file names. See
//! [`sniff`] for the classifier.
//!
//! # Examples
//!
//! ```
//! use satchel_core::ArchiveReader;
//! use satchel_core::ArchiveWriter;
//! use satchel_core::CandidateFile;
//! use std::io::Cursor;
//!
//! let built = ArchiveWriter::default().build(vec![
//!     CandidateFile::from_bytes("a.txt", b"alpha".to_vec()),
//!     CandidateFile::from_bytes("b.txt", b"beta".to_vec()),
//! ])?;
//!
//! let size = built.byte_size();
//! let report =
//!     ArchiveReader::default().inspect("bundle.zip", size, Cursor::new(built.into_bytes()))?;
//! assert_eq!(report.entry_count(), 2);
//! assert_eq!(report.total_uncompressed_size(), 9);
//! # Ok::<(), satchel_core::ArchiveError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod creation;
pub mod error;
pub mod inspection;
pub mod io;
pub mod progress;
pub mod sniff;

#[cfg(test)]
mod test_utils;

pub use api::build_archive;
pub use api::inspect_archive;
pub use config::EntryFailurePolicy;
pub use config::InspectConfig;
pub use creation::ArchiveWriter;
pub use creation::BuildConfig;
pub use creation::BuiltArchive;
pub use creation::CandidateFile;
pub use error::ArchiveError;
pub use error::QuotaResource;
pub use error::Result;
pub use inspection::ArchiveEntry;
pub use inspection::ArchiveReader;
pub use inspection::ArchiveReport;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
