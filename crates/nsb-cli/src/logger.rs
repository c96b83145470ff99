//! Logging setup for the `nsb` binary.
//!
//! Library crates only emit `tracing` events; this module installs the one
//! subscriber that renders them. Everything is written to stderr so that a
//! bundle printed on stdout stays clean.
//!
//! Verbosity, in order of precedence:
//! 1. `--verbose`: DEBUG for every nsb crate
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: INFO for the CLI, WARN for the libraries
//!
//! ```rust,no_run
//! use nsb_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("starting");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_DIRECTIVES: &str = "nsb=debug,nsb_graph=debug,nsb_bundler=debug,nsb_cli=debug";
const QUIET_DIRECTIVES: &str = "nsb=error,nsb_graph=error,nsb_bundler=error,nsb_cli=error";
const DEFAULT_DIRECTIVES: &str = "nsb=info,nsb_cli=info,nsb_graph=warn,nsb_bundler=warn";

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any logging happens. `verbose` wins over
/// `quiet` (clap already rejects the combination).
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match fixed_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
        }
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize the subscriber with an explicit filter.
///
/// ```rust,no_run
/// use nsb_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("nsb_graph=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Directives forced by command-line flags, if any.
fn fixed_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_DIRECTIVES)
    } else if quiet {
        Some(QUIET_DIRECTIVES)
    } else {
        None
    }
}

/// Whether log output should be colored.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// decision follows the capabilities of stderr.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
