//! Shell completion generation command.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Generates shell completions for the specified shell.
///
/// The script is written to stdout, e.g.
/// `satchel completion bash > /etc/bash_completion.d/satchel`.
pub fn execute(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "satchel", &mut io::stdout());
}
