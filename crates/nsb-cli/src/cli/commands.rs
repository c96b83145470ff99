use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::validation::{parse_extension, parse_separator};

/// Available nsb subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a bundle
    ///
    /// Resolves the load order of every source under ROOT and concatenates
    /// the files in that order. The bundle is written to the configured
    /// output file, or printed to stdout when there is none.
    Build(BuildArgs),

    /// Print the resolved load order
    ///
    /// One path per line, relative to ROOT. Nothing is assembled or written.
    Order(OrderArgs),

    /// Validate a source tree
    ///
    /// Builds and resolves the dependency graph, then reports modules that
    /// own no symbol and symbols claimed by more than one file. Exits with a
    /// non-zero status when the sources contain a dependency cycle.
    Check(CheckArgs),
}

/// Options shared by every subcommand that reads a source tree.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Source directory to scan
    ///
    /// Defaults to `root` from the config file, then to the current directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// File extension to include (repeatable)
    ///
    /// Examples:
    ///   nsb build --ext js --ext mjs
    #[arg(long = "ext", value_name = "EXT", value_parser = parse_extension)]
    pub extensions: Vec<String>,

    /// Fail when two files define the same owning symbol
    ///
    /// Without this flag references to such a symbol create no ordering
    /// edge and the duplicate is reported as a warning.
    #[arg(long)]
    pub strict_symbols: bool,

    /// Path to a config file
    ///
    /// Defaults to `nsb.config.json` in the working directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Working directory for the config file and relative paths
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file for the bundle
    ///
    /// Parent directories are created. Without an output file the bundle
    /// is printed to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Text inserted between files
    ///
    /// Accepts `\n`, `\t` and `\\` escapes.
    ///
    /// Examples:
    ///   nsb build --separator '\n;\n'
    #[arg(long, value_name = "TEXT", value_parser = parse_separator)]
    pub separator: Option<String>,

    /// Keep 'use strict' directives where they are instead of hoisting one
    /// to the top of the bundle
    #[arg(long)]
    pub no_hoist_strict: bool,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the order command
#[derive(Args, Debug, Clone, Default)]
pub struct OrderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the order as JSON
    #[arg(long)]
    pub json: bool,

    /// Group modules by resolution layer
    ///
    /// Modules in one layer depend only on modules of earlier layers.
    #[arg(long)]
    pub layers: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
