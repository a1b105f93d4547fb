//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use satchel_core::sniff::SNIFF_LEN;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "satchel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List archive entries with sizes and detected media types
    Info(InfoArgs),
    /// Bundle files into a new ZIP archive
    Bundle(BundleArgs),
    /// Detect the media type of files from their content
    Sniff(SniffArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct InfoArgs {
    /// Path to the archive file, or '-' to read from stdin
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Name reported for the archive (default: the file name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Bytes read from each entry for type detection
    #[arg(long, default_value_t = SNIFF_LEN)]
    pub sniff_len: usize,

    /// Maximum number of entries to list
    #[arg(long, default_value = "10000")]
    pub max_entries: usize,

    /// Maximum total uncompressed size of all entries
    #[arg(long, value_parser = parse_byte_size)]
    pub max_total_size: Option<u64>,

    /// Leave out entries that cannot be read instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,
}

#[derive(clap::Args)]
pub struct BundleArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Files to add; each is stored under its file name
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Compression level (0 = store, 1-9 = deflate)
    #[arg(
        short = 'l',
        long,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub compression_level: u8,

    /// Additional media type to accept (can be repeated)
    #[arg(long = "allow", value_name = "MIME")]
    pub allow: Vec<String>,

    /// Maximum size of a single input file
    #[arg(long, value_parser = parse_byte_size)]
    pub max_file_size: Option<u64>,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct SniffArgs {
    /// Files to classify
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Bytes read from each file
    #[arg(long, default_value_t = SNIFF_LEN)]
    pub sniff_len: usize,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte_size() {
        assert_eq!(parse_byte_size("100").unwrap(), 100);
        assert_eq!(parse_byte_size("1K").unwrap(), 1024);
        assert_eq!(parse_byte_size("2M").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_byte_size("3G").unwrap(), 3 * 1024 * 1024 * 1024);
        assert_eq!(parse_byte_size("1T").unwrap(), 1024_u64.pow(4));
        assert!(parse_byte_size("invalid").is_err());
        assert!(parse_byte_size("").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bundle_defaults() {
        let cli = Cli::try_parse_from(["satchel", "bundle", "out.zip", "a.txt"]).unwrap();
        let Commands::Bundle(args) = cli.command else {
            panic!("expected bundle");
        };
        assert_eq!(args.compression_level, 6);
        assert!(args.allow.is_empty());
        assert!(!args.force);
        assert_eq!(args.files, [PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_bundle_rejects_level_above_nine() {
        let result = Cli::try_parse_from(["satchel", "bundle", "-l", "10", "out.zip", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_info_accepts_stdin_marker() {
        let cli =
            Cli::try_parse_from(["satchel", "info", "-", "--name", "upload.zip"]).unwrap();
        let Commands::Info(args) = cli.command else {
            panic!("expected info");
        };
        assert_eq!(args.archive, PathBuf::from("-"));
        assert_eq!(args.name.as_deref(), Some("upload.zip"));
        assert_eq!(args.sniff_len, 512);
    }

    #[test]
    fn test_parse_byte_size_overflow() {
        assert!(parse_byte_size("18446744073709551615K").is_err()); // u64::MAX / 1024 + 1
        assert!(parse_byte_size("18014398509481984M").is_err()); // u64::MAX / (1024^2) + 1
        assert!(parse_byte_size("17592186044416G").is_err()); // u64::MAX / (1024^3) + 1
    }
}
