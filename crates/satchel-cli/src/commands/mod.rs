//! Subcommand implementations.

pub mod bundle;
pub mod completion;
pub mod info;
pub mod sniff;
