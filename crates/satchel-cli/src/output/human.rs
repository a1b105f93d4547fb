//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::formatter::SniffResult;
use anyhow::Result;
use console::Term;
use console::style;
use satchel_core::ArchiveEntry;
use satchel_core::ArchiveReport;
use satchel_core::BuiltArchive;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    /// Size column of an entry listing. Directories show `<dir>`.
    fn size_column(entry: &ArchiveEntry, exact: bool) -> String {
        if entry.is_dir() {
            "<dir>".to_string()
        } else if exact {
            entry.uncompressed_size.to_string()
        } else {
            Self::format_size(entry.uncompressed_size)
        }
    }

    /// Formats a byte count with a binary unit, e.g. `1.5 KB`.
    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

        if bytes < 1024 {
            return format!("{bytes} B");
        }
        let mut value = bytes as f64 / 1024.0;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{value:.1} {}", UNITS[unit])
    }

    /// Formats a count with thousands separators, e.g. `12,345`.
    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            self.line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_archive_info(&self, report: &ArchiveReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let header = format!(
            "{} ({})",
            report.source_name(),
            Self::format_size(report.archive_size())
        );
        if self.use_colors {
            self.line(&format!("{}", style(header).bold()));
        } else {
            self.line(&header);
        }

        if report.is_empty() {
            self.line("  (no entries)");
            return Ok(());
        }

        for entry in report.entries() {
            let size_str = Self::size_column(entry, self.verbose);
            let media_type = if self.use_colors {
                style(format!("{:<28}", entry.media_type)).cyan().to_string()
            } else {
                format!("{:<28}", entry.media_type)
            };
            self.line(&format!("{size_str:>10}  {media_type} {}", entry.path));
        }

        self.line("");
        self.line(&format!(
            "Total: {} files, {}",
            Self::format_number(report.entry_count()),
            Self::format_size(report.total_uncompressed_size())
        ));

        Ok(())
    }

    fn format_bundle_result(&self, output: &Path, built: &BuiltArchive) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.success_line(&format!("Archive created: {}", output.display()));
        self.line("");
        self.line(&format!(
            "  Files added:      {}",
            Self::format_number(built.entry_count())
        ));
        self.line(&format!(
            "  Total size:       {}",
            Self::format_size(built.total_uncompressed_size())
        ));
        self.line(&format!(
            "  Archive size:     {}",
            Self::format_size(built.byte_size())
        ));

        if self.verbose {
            self.line(&format!(
                "  Compression:      {:.2}:1",
                built.compression_ratio()
            ));
            self.line(&format!("  Duration:         {:?}", built.duration()));
        }

        Ok(())
    }

    fn format_sniff_results(&self, results: &[SniffResult]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for result in results {
            let marker = if result.container { "  [archive]" } else { "" };
            let media_type = if self.use_colors {
                style(result.mimetype).cyan().to_string()
            } else {
                result.mimetype.to_string()
            };
            self.line(&format!("{}: {media_type}{marker}", result.file_path));
        }

        Ok(())
    }
}
