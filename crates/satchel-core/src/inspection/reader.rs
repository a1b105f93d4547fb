//! ZIP enumeration with per-entry content sniffing.

use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::ZipArchive;

use crate::ArchiveError;
use crate::EntryFailurePolicy;
use crate::InspectConfig;
use crate::Result;
use crate::error::QuotaResource;
use crate::error::from_zip;
use crate::inspection::report::ArchiveEntry;
use crate::inspection::report::ArchiveReport;
use crate::io::BoundedReader;
use crate::sniff;

/// Opens ZIP containers and reports their entries.
///
/// The reader holds only its configuration; one instance can serve any
/// number of independent inspections.
///
/// # Examples
///
/// ```no_run
/// use satchel_core::ArchiveReader;
/// use satchel_core::InspectConfig;
/// use std::fs::File;
///
/// let file = File::open("upload.zip")?;
/// let size = file.metadata()?.len();
///
/// let reader = ArchiveReader::new(InspectConfig::default());
/// let report = reader.inspect("upload.zip", size, file)?;
/// for entry in report.entries() {
///     println!("{} {} {}", entry.path, entry.uncompressed_size, entry.media_type);
/// }
/// # Ok::<(), satchel_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReader {
    config: InspectConfig,
}

impl ArchiveReader {
    /// Creates a reader with the given configuration.
    #[must_use]
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Returns the reader's configuration.
    #[must_use]
    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Inspects an archive.
    ///
    /// `declared_size` is taken as the archive's total length: the central
    /// directory is looked up relative to it and it is reported as
    /// `archive_size`. Entry sizes come from the directory; entries are never
    /// decompressed beyond the sniff prefix.
    ///
    /// # Errors
    ///
    /// - `NotAnArchive` if the stream does not start with a ZIP signature
    /// - `CorruptArchive` if the directory cannot be parsed or an entry's
    ///   content cannot be read (under [`EntryFailurePolicy::Abort`])
    /// - `QuotaExceeded` if `max_entries` or `max_total_size` is exceeded
    /// - `InvalidSniffLength` if the configuration is invalid
    /// - `Io` if the underlying stream fails
    #[tracing::instrument(level = "debug", skip(self, reader))]
    pub fn inspect<R: Read + Seek>(
        &self,
        name: &str,
        declared_size: u64,
        mut reader: R,
    ) -> Result<ArchiveReport> {
        self.config.validate()?;

        reader.seek(SeekFrom::Start(0))?;
        let prefix = sniff::read_prefix(&mut reader, self.config.sniff_len)?;
        if !sniff::is_container_format(&prefix) {
            debug!(media_type = sniff::classify(&prefix), "rejected non-container input");
            return Err(ArchiveError::NotAnArchive);
        }

        let bounded = BoundedReader::new(reader, declared_size)?;
        let mut archive =
            ZipArchive::new(bounded).map_err(|e| from_zip(e, "failed to open ZIP archive"))?;

        let entry_count = archive.len();
        if entry_count > self.config.max_entries {
            return Err(ArchiveError::QuotaExceeded {
                resource: QuotaResource::EntryCount {
                    current: entry_count,
                    max: self.config.max_entries,
                },
            });
        }

        let mut report = ArchiveReport::new(name, declared_size);
        for index in 0..entry_count {
            match read_entry(&mut archive, index, self.config.sniff_len) {
                Ok(entry) => {
                    self.check_total_size(&report, &entry)?;
                    debug!(
                        path = %entry.path,
                        size = entry.uncompressed_size,
                        media_type = %entry.media_type,
                        "entry"
                    );
                    report.push(entry);
                }
                Err(err) => self.on_entry_failure(index, err)?,
            }
        }

        info!(
            entries = report.entry_count(),
            total_size = report.total_uncompressed_size(),
            "archive inspected"
        );
        Ok(report)
    }

    /// Single decision point for unreadable entries.
    fn on_entry_failure(&self, index: usize, err: ArchiveError) -> Result<()> {
        match (self.config.on_entry_failure, &err) {
            (EntryFailurePolicy::Skip, ArchiveError::CorruptArchive { reason }) => {
                warn!(index, %reason, "skipping unreadable entry");
                Ok(())
            }
            _ => Err(err),
        }
    }

    fn check_total_size(&self, report: &ArchiveReport, entry: &ArchiveEntry) -> Result<()> {
        let Some(max) = self.config.max_total_size else {
            return Ok(());
        };
        let current = report
            .total_uncompressed_size()
            .saturating_add(entry.uncompressed_size);
        if current > max {
            return Err(ArchiveError::QuotaExceeded {
                resource: QuotaResource::TotalSize { current, max },
            });
        }
        Ok(())
    }
}

/// Reads one entry's metadata and sniffs its first bytes.
///
/// The entry's content stream lives only inside this function, so at most
/// one entry is open at any time.
fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    sniff_len: usize,
) -> Result<ArchiveEntry> {
    let mut file = archive
        .by_index(index)
        .map_err(|e| from_zip(e, &format!("failed to open entry #{index}")))?;

    let path = file.name().to_string();
    let uncompressed_size = file.size();
    let prefix = sniff::read_prefix(&mut file, sniff_len)
        .map_err(|e| ArchiveError::corrupt(format!("failed to read entry '{path}': {e}")))?;

    Ok(ArchiveEntry {
        media_type: sniff::classify(&prefix).to_string(),
        path,
        uncompressed_size,
    })
}
