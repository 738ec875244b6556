//! CLI argument parsing and the non-interactive subcommands.

mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::{print_locale_gaps, print_timeline, print_translations};
