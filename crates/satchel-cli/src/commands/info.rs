//! Info command implementation

use crate::cli::InfoArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use satchel_core::ArchiveReader;
use satchel_core::ArchiveReport;
use satchel_core::EntryFailurePolicy;
use satchel_core::InspectConfig;
use std::fs::File;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Archive argument that selects stdin.
const STDIN_MARKER: &str = "-";

pub fn execute(args: &InfoArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let policy = if args.skip_unreadable {
        EntryFailurePolicy::Skip
    } else {
        EntryFailurePolicy::Abort
    };
    let config = InspectConfig::default()
        .with_sniff_len(args.sniff_len)
        .with_max_entries(args.max_entries)
        .with_max_total_size(args.max_total_size)
        .with_entry_failure_policy(policy);
    let reader = ArchiveReader::new(config);

    let report = if args.archive.as_os_str() == STDIN_MARKER {
        inspect_stdin(&reader, args.name.as_deref().unwrap_or("stdin"))?
    } else {
        let name = args
            .name
            .clone()
            .unwrap_or_else(|| display_name(&args.archive));
        inspect_file(&reader, &args.archive, &name)?
    };

    formatter.format_archive_info(&report)
}

fn inspect_file(reader: &ArchiveReader, path: &Path, name: &str) -> Result<ArchiveReport> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let size = file
        .metadata()
        .with_context(|| format!("failed to read metadata of '{}'", path.display()))?
        .len();
    add_archive_context(reader.inspect(name, size, file), name)
}

/// Spools stdin into a scratch file so the reader can seek.
///
/// The scratch file is removed when it goes out of scope, on success and
/// on every error path.
fn inspect_stdin(reader: &ArchiveReader, name: &str) -> Result<ArchiveReport> {
    let mut scratch = NamedTempFile::new().context("failed to create scratch file for stdin")?;
    let size = io::copy(&mut io::stdin().lock(), scratch.as_file_mut())
        .context("failed to read archive from stdin")?;
    tracing::debug!(size, path = %scratch.path().display(), "spooled stdin");
    add_archive_context(reader.inspect(name, size, scratch.as_file_mut()), name)
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(&PathBuf::from("/srv/uploads/cv.zip")), "cv.zip");
        assert_eq!(display_name(&PathBuf::from("plain.zip")), "plain.zip");
    }
}
