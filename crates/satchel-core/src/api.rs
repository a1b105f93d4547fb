//! High-level entry points working on paths.

use std::fs::File;
use std::path::Path;

use crate::ArchiveReader;
use crate::ArchiveReport;
use crate::ArchiveWriter;
use crate::BuildConfig;
use crate::BuiltArchive;
use crate::CandidateFile;
use crate::InspectConfig;
use crate::Result;

/// Inspects the archive at `path`.
///
/// The file's length is used as the declared size and its final path
/// component as the report's source name.
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened, plus everything
/// [`ArchiveReader::inspect`] returns.
///
/// # Examples
///
/// ```no_run
/// use satchel_core::InspectConfig;
/// use satchel_core::inspect_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = inspect_archive("upload.zip", &InspectConfig::default())?;
/// println!("{} files", report.entry_count());
/// # Ok(())
/// # }
/// ```
pub fn inspect_archive<P: AsRef<Path>>(path: P, config: &InspectConfig) -> Result<ArchiveReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    let name = path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |n| n.to_string_lossy().into_owned(),
    );
    ArchiveReader::new(config.clone()).inspect(&name, size, file)
}

/// Builds an archive from files on disk.
///
/// Each file is added under its final path component.
///
/// # Errors
///
/// Returns `Io` if a file cannot be opened, plus everything
/// [`ArchiveWriter::build`] returns.
///
/// # Examples
///
/// ```no_run
/// use satchel_core::BuildConfig;
/// use satchel_core::build_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let built = build_archive(&["cv.pdf", "photo.jpg"], &BuildConfig::default())?;
/// std::fs::write(built.suggested_filename(), built.bytes())?;
/// # Ok(())
/// # }
/// ```
pub fn build_archive<P: AsRef<Path>>(paths: &[P], config: &BuildConfig) -> Result<BuiltArchive> {
    let files = paths
        .iter()
        .map(CandidateFile::<File>::open)
        .collect::<Result<Vec<_>>>()?;
    ArchiveWriter::new(config.clone()).build(files)
}
