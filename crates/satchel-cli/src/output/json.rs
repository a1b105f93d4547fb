//! JSON output formatter for machine-readable results.

use super::formatter::ArchiveInfo;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::SniffResult;
use anyhow::Result;
use satchel_core::ArchiveReport;
use satchel_core::BuiltArchive;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_archive_info(&self, report: &ArchiveReport) -> Result<()> {
        let output = JsonOutput::success("info", ArchiveInfo::from(report));
        Self::output(&output)
    }

    fn format_bundle_result(&self, output: &Path, built: &BuiltArchive) -> Result<()> {
        #[derive(Serialize)]
        struct BundleOutput {
            output_path: String,
            filename: String,
            content_type: &'static str,
            archive_size: u64,
            total_size: u64,
            total_files: usize,
            compression_ratio: f64,
            duration_ms: u128,
        }

        let data = BundleOutput {
            output_path: output.display().to_string(),
            filename: built.suggested_filename(),
            content_type: built.content_type(),
            archive_size: built.byte_size(),
            total_size: built.total_uncompressed_size(),
            total_files: built.entry_count(),
            compression_ratio: built.compression_ratio(),
            duration_ms: built.duration().as_millis(),
        };

        let output = JsonOutput::success("bundle", data);
        Self::output(&output)
    }

    fn format_sniff_results(&self, results: &[SniffResult]) -> Result<()> {
        let output = JsonOutput::success("sniff", results);
        Self::output(&output)
    }
}
