//! Validated ZIP construction from named input streams.

use std::collections::HashSet;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ArchiveError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::candidate::CandidateFile;
use crate::creation::config::BuildConfig;
use crate::creation::progress::ProgressTracker;
use crate::creation::report::BuiltArchive;
use crate::error::QuotaResource;
use crate::sniff;

/// Size of the copy buffer shared by all entries of one build.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Builds ZIP archives from candidate files.
///
/// Every file is sniffed and checked against the allow-list before the
/// first entry is written, so a rejected file never leaves a partial
/// archive behind.
///
/// # Examples
///
/// ```
/// use satchel_core::ArchiveWriter;
/// use satchel_core::BuildConfig;
/// use satchel_core::CandidateFile;
///
/// let writer = ArchiveWriter::new(BuildConfig::default().with_compression_level(9));
/// let built = writer.build(vec![
///     CandidateFile::from_bytes("a.txt", b"first".to_vec()),
///     CandidateFile::from_bytes("b.txt", b"second".to_vec()),
/// ])?;
/// assert_eq!(built.entry_count(), 2);
/// # Ok::<(), satchel_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveWriter {
    config: BuildConfig,
}

impl ArchiveWriter {
    /// Creates a writer with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Returns the writer's configuration.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds an archive containing `files` in input order.
    ///
    /// Names are written as given and never renamed. The ZIP writer refuses
    /// a second entry under an existing name, so a repeated name fails the
    /// whole build with `DuplicateEntryName` before anything is written.
    ///
    /// # Errors
    ///
    /// See [`build_with_progress`](Self::build_with_progress).
    pub fn build<R: Read + Seek>(&self, files: Vec<CandidateFile<R>>) -> Result<BuiltArchive> {
        self.build_with_progress(files, &mut NoopProgress)
    }

    /// Builds an archive and reports progress to `progress`.
    ///
    /// Entry names are the candidates' names, unmodified.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `files` is empty
    /// - `QuotaExceeded` if a file is larger than `max_file_size`
    /// - `UnsupportedMediaType` if a file sniffs outside the allow-list
    /// - `DuplicateEntryName` if two files share a name
    /// - `InvalidCompressionLevel` / `InvalidSniffLength` for a bad config
    /// - `Io` if a stream cannot be read or the container cannot be written
    #[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
    pub fn build_with_progress<R: Read + Seek>(
        &self,
        mut files: Vec<CandidateFile<R>>,
        progress: &mut dyn ProgressCallback,
    ) -> Result<BuiltArchive> {
        self.config.validate()?;
        if files.is_empty() {
            return Err(ArchiveError::EmptyInput);
        }
        let start = Instant::now();

        check_unique_names(&files)?;
        for file in &mut files {
            self.admit(file)?;
        }

        let options = self.entry_options();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut tracker = ProgressTracker::new(progress, files.len());
        let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
        let mut total_size = 0u64;

        for file in &mut files {
            tracker.on_entry_start(&file.name);

            zip.start_file(file.name.as_str(), options).map_err(|e| {
                std::io::Error::other(format!("failed to start entry '{}': {e}", file.name))
            })?;
            let copied = copy_entry(&mut zip, tracker.reader(&mut file.reader), &mut buffer)?;
            self.check_file_size(&file.name, copied)?;
            total_size = total_size.saturating_add(copied);
            debug!(name = %file.name, size = copied, "entry written");

            tracker.on_entry_complete(&file.name);
        }

        let bytes = zip
            .finish()
            .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?
            .into_inner();
        tracker.on_complete();

        let built = BuiltArchive::new(bytes, files.len(), total_size, start.elapsed());
        info!(
            entries = built.entry_count(),
            size = built.byte_size(),
            "archive built"
        );
        Ok(built)
    }

    /// Checks one candidate's size and media type, leaving its stream at 0.
    fn admit<R: Read + Seek>(&self, file: &mut CandidateFile<R>) -> Result<()> {
        self.check_file_size(&file.name, file.declared_size)?;

        file.reader.seek(SeekFrom::Start(0))?;
        let prefix = sniff::read_prefix(&mut file.reader, self.config.sniff_len)?;
        file.reader.seek(SeekFrom::Start(0))?;

        let media_type = sniff::classify(&prefix);
        if !self.config.allows(media_type) {
            debug!(name = %file.name, media_type, "rejected file");
            return Err(ArchiveError::UnsupportedMediaType {
                name: file.name.clone(),
                media_type: media_type.to_string(),
            });
        }
        debug!(name = %file.name, media_type, "accepted file");
        Ok(())
    }

    fn check_file_size(&self, name: &str, size: u64) -> Result<()> {
        match self.config.max_file_size {
            Some(max) if size > max => Err(ArchiveError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    name: name.to_string(),
                    size,
                    max,
                },
            }),
            _ => Ok(()),
        }
    }

    fn entry_options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default().unix_permissions(0o644);
        if self.config.compression_level == 0 {
            options.compression_method(CompressionMethod::Stored)
        } else {
            options
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(self.config.compression_level)))
        }
    }
}

fn check_unique_names<R>(files: &[CandidateFile<R>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(files.len());
    for file in files {
        if !seen.insert(file.name.as_str()) {
            return Err(ArchiveError::DuplicateEntryName {
                name: file.name.clone(),
            });
        }
    }
    Ok(())
}

/// Copies `reader` into the open entry, returning the number of bytes.
fn copy_entry<W: Write, R: Read>(zip: &mut W, mut reader: R, buffer: &mut [u8]) -> Result<u64> {
    let mut copied = 0u64;
    loop {
        let n = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        zip.write_all(&buffer[..n])?;
        copied += n as u64;
    }
    Ok(copied)
}
