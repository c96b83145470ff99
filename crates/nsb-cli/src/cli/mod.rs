//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `nsb build` - Resolve and concatenate a source tree into one bundle
//! - `nsb order` - Print the resolved load order
//! - `nsb check` - Validate a source tree without producing output

mod commands;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, OrderArgs, SourceArgs};
pub use validation::{parse_extension, parse_separator};

/// nsb - a dependency-ordering bundler for namespace-style JavaScript
#[derive(Parser, Debug)]
#[command(
    name = "nsb",
    version,
    about = "Bundle namespace-style JavaScript trees in dependency order",
    long_about = "nsb scans a directory of scripts that talk to each other through global\n\
                  namespace symbols (A.B.C), infers which file defines which symbol, and\n\
                  concatenates every file after the files it references."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-pass details of symbol extraction, graph construction and
    /// resolution.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
