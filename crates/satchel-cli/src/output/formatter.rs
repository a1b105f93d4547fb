//! Output formatter trait for CLI results.

use anyhow::Result;
use satchel_core::ArchiveReport;
use satchel_core::BuiltArchive;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format an archive listing
    fn format_archive_info(&self, report: &ArchiveReport) -> Result<()>;

    /// Format the result of bundling files into `output`
    fn format_bundle_result(&self, output: &Path, built: &BuiltArchive) -> Result<()>;

    /// Format media type detection results
    fn format_sniff_results(&self, results: &[SniffResult]) -> Result<()>;
}

/// Media type detected for one file.
#[derive(Debug, Serialize)]
pub struct SniffResult {
    pub file_path: String,
    pub mimetype: &'static str,
    pub container: bool,
}

/// Serialized form of an archive listing.
#[derive(Debug, Serialize)]
pub struct ArchiveInfo<'a> {
    pub filename: &'a str,
    pub archive_size: u64,
    pub total_size: u64,
    pub total_files: usize,
    pub files: Vec<FileInfo<'a>>,
}

/// Serialized form of one archive entry.
#[derive(Debug, Serialize)]
pub struct FileInfo<'a> {
    pub file_path: &'a str,
    pub size: u64,
    pub mimetype: &'a str,
}

impl<'a> From<&'a ArchiveReport> for ArchiveInfo<'a> {
    fn from(report: &'a ArchiveReport) -> Self {
        Self {
            filename: report.source_name(),
            archive_size: report.archive_size(),
            total_size: report.total_uncompressed_size(),
            total_files: report.entry_count(),
            files: report
                .entries()
                .iter()
                .map(|entry| FileInfo {
                    file_path: &entry.path,
                    size: entry.uncompressed_size,
                    mimetype: &entry.media_type,
                })
                .collect(),
        }
    }
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
