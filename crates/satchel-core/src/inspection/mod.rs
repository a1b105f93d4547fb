//! Archive inspection without extraction.
//!
//! Enumerates a ZIP container's entries with their stored sizes and a media
//! type sniffed from each entry's first bytes. Nothing is written to disk.
//!
//! # Examples
//!
//! ```no_run
//! use satchel_core::InspectConfig;
//! use satchel_core::inspect_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = inspect_archive("upload.zip", &InspectConfig::default())?;
//! println!(
//!     "{} entries, {} bytes uncompressed",
//!     report.entry_count(),
//!     report.total_uncompressed_size()
//! );
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod report;

pub use reader::ArchiveReader;
pub use report::ArchiveEntry;
pub use report::ArchiveReport;
