//! Tooling & Integration Layer
//!
//! The command-line surface the shell integration calls into.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, ShellKind};
