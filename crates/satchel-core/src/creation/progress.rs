//! Progress tracking helpers used by the archive writer.
//!
//! - **`ProgressTracker`**: numbers entries and forwards lifecycle events
//! - **`ProgressReader`**: reports bytes pulled through a reader, batched

use crate::ProgressCallback;
use std::io::Read;

/// Bytes a `ProgressReader` accumulates before reporting.
const BATCH_THRESHOLD: u64 = 64 * 1024;

/// Forwards progress events with automatic entry numbering.
///
/// # Examples
///
/// ```
/// use satchel_core::NoopProgress;
/// use satchel_core::creation::progress::ProgressTracker;
///
/// let mut progress = NoopProgress;
/// let mut tracker = ProgressTracker::new(&mut progress, 2);
///
/// tracker.on_entry_start("a.txt");
/// tracker.on_entry_complete("a.txt");
/// tracker.on_entry_start("b.png");
/// tracker.on_entry_complete("b.png");
/// tracker.on_complete();
/// ```
pub struct ProgressTracker<'a> {
    progress: &'a mut dyn ProgressCallback,
    /// 1-indexed number of the entry in progress
    current_entry: usize,
    total_entries: usize,
}

impl<'a> ProgressTracker<'a> {
    /// Creates a tracker for `total_entries` entries.
    #[must_use]
    pub fn new(progress: &'a mut dyn ProgressCallback, total_entries: usize) -> Self {
        Self {
            progress,
            current_entry: 0,
            total_entries,
        }
    }

    /// Advances the entry counter and reports the start of `name`.
    pub fn on_entry_start(&mut self, name: &str) {
        self.current_entry += 1;
        self.progress
            .on_entry_start(name, self.total_entries, self.current_entry);
    }

    /// Reports that `name` was written.
    pub fn on_entry_complete(&mut self, name: &str) {
        self.progress.on_entry_complete(name);
    }

    /// Reports that the archive was finalized.
    pub fn on_complete(&mut self) {
        self.progress.on_complete();
    }

    /// Wraps `inner` so bytes read through it are reported to the callback.
    pub fn reader<R: Read>(&mut self, inner: R) -> ProgressReader<'_, R> {
        ProgressReader::new(inner, &mut *self.progress)
    }
}

/// Reader wrapper reporting bytes read to a progress callback.
///
/// Updates are batched: the callback fires once `BATCH_THRESHOLD` bytes
/// have accumulated, and the remainder is flushed on drop.
pub struct ProgressReader<'a, R> {
    inner: R,
    progress: &'a mut dyn ProgressCallback,
    bytes_since_last_update: u64,
}

impl<'a, R> ProgressReader<'a, R> {
    /// Creates a reader that reports in batches of `BATCH_THRESHOLD` bytes.
    #[must_use]
    pub fn new(inner: R, progress: &'a mut dyn ProgressCallback) -> Self {
        Self {
            inner,
            progress,
            bytes_since_last_update: 0,
        }
    }

    /// Reports any accumulated bytes now.
    pub fn flush_progress(&mut self) {
        if self.bytes_since_last_update > 0 {
            self.progress.on_bytes_written(self.bytes_since_last_update);
            self.bytes_since_last_update = 0;
        }
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let bytes_read = self.inner.read(buf)?;
        self.bytes_since_last_update += bytes_read as u64;
        if self.bytes_since_last_update >= BATCH_THRESHOLD {
            self.flush_progress();
        }
        Ok(bytes_read)
    }
}

impl<R> Drop for ProgressReader<'_, R> {
    fn drop(&mut self) {
        self.flush_progress();
    }
}
