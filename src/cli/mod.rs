//! CLI module for nanoform
//!
//! Provides command-line interface for:
//! - serve: HTTP server for the screening form
//! - predict: one-shot verdict for a JSON request on stdin
//! - report: one-shot PDF report for a JSON request on stdin
//! - options: print the form's choices

mod args;
mod commands;
mod errors;
mod io;

pub use args::{AssetArgs, Cli, Command};
pub use commands::{boot, options, predict, report, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
