//! Archive construction.
//!
//! Candidate files are sniffed, checked against an allow-list of media
//! types and written in input order into a new ZIP container held in
//! memory.
//!
//! # Examples
//!
//! ```
//! use satchel_core::ArchiveWriter;
//! use satchel_core::CandidateFile;
//!
//! let built = ArchiveWriter::default().build(vec![CandidateFile::from_bytes(
//!     "hello.txt",
//!     b"hello".to_vec(),
//! )])?;
//! assert!(built.suggested_filename().starts_with("archive-"));
//! # Ok::<(), satchel_core::ArchiveError>(())
//! ```

pub mod candidate;
pub mod config;
pub mod progress;
pub mod report;
pub mod writer;

pub use candidate::CandidateFile;
pub use config::BuildConfig;
pub use config::DEFAULT_ALLOWED_MEDIA_TYPES;
pub use report::BuiltArchive;
pub use writer::ArchiveWriter;
