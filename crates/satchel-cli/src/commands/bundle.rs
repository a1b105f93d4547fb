//! Bundle command implementation

use crate::cli::BundleArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use satchel_core::ArchiveWriter;
use satchel_core::BuildConfig;
use satchel_core::CandidateFile;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn execute(args: &BundleArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "Output file '{}' already exists\n\
             HINT: Use --force to overwrite.",
            args.output.display()
        );
    }

    let mut config = BuildConfig::default()
        .with_compression_level(args.compression_level)
        .with_max_file_size(args.max_file_size);
    config.allowed_media_types.extend(args.allow.iter().cloned());

    let files = args
        .files
        .iter()
        .map(|path| {
            CandidateFile::open(path).with_context(|| format!("failed to open '{}'", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let subject = args.output.display().to_string();
    let writer = ArchiveWriter::new(config);
    let built = if !quiet && CliProgress::should_show() {
        let total_bytes = files.iter().map(|f| f.declared_size).sum();
        let mut progress = CliProgress::new(total_bytes);
        add_archive_context(writer.build_with_progress(files, &mut progress), &subject)?
    } else {
        add_archive_context(writer.build(files), &subject)?
    };

    write_atomically(&args.output, built.bytes(), args.force)?;
    formatter.format_bundle_result(&args.output, &built)
}

/// Writes `bytes` to a scratch file next to `output`, then renames it into
/// place. Readers of `output` never see a partial archive.
fn write_atomically(output: &Path, bytes: &[u8], overwrite: bool) -> Result<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut scratch = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create scratch file in '{}'", dir.display()))?;
    scratch
        .write_all(bytes)
        .and_then(|()| scratch.as_file().sync_all())
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    let persisted = if overwrite {
        scratch.persist(output)
    } else {
        scratch.persist_noclobber(output)
    };
    persisted.map_err(|e| anyhow!("failed to move archive to '{}': {}", output.display(), e.error))?;
    Ok(())
}
