//! Sniff command implementation

use crate::cli::SniffArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::output::SniffResult;
use anyhow::Context;
use anyhow::Result;
use satchel_core::sniff;
use std::fs::File;

pub fn execute(args: &SniffArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    add_archive_context(sniff::validate_sniff_len(args.sniff_len), "--sniff-len")?;

    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let mut file =
            File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
        let prefix = sniff::read_prefix(&mut file, args.sniff_len)
            .with_context(|| format!("failed to read '{}'", path.display()))?;

        results.push(SniffResult {
            file_path: path.display().to_string(),
            mimetype: sniff::classify(&prefix),
            container: sniff::is_container_format(&prefix),
        });
    }

    formatter.format_sniff_results(&results)
}
