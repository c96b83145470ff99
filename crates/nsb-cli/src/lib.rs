//! # nsb-cli
//!
//! Command-line front end for the namespace bundler.
//!
//! The binary is a thin layer over [`nsb_bundler`]: it parses arguments,
//! merges them with `nsb.config.json` and `NSB_*` environment variables,
//! runs the pipeline and renders results or diagnostics on the terminal.
//!
//! Progress, summaries and logs go to stderr. Stdout carries only command
//! output (a bundle or a load order), so it can be piped.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use config::NsbConfig;
pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
