//! `nsb build`

use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::cli::BuildArgs;
use crate::commands::resolve_cwd;
use crate::config::{ConfigOverrides, NsbConfig};
use crate::error::Result;
use crate::ui;

/// Resolve, assemble and emit one bundle.
///
/// The bundle goes to the configured output file, written atomically, or
/// to stdout when no output file is configured. Nothing is emitted unless
/// the whole pipeline succeeds.
pub fn execute(args: BuildArgs, quiet: bool) -> Result<()> {
    let cwd = resolve_cwd(args.source.cwd.as_deref())?;
    let config = NsbConfig::load(
        &ConfigOverrides::from(&args),
        args.source.config.as_deref(),
        &cwd,
    )?;
    debug!(?config, "resolved configuration");

    let started = Instant::now();
    let spinner = if quiet {
        ui::Spinner::hidden()
    } else {
        ui::Spinner::new("Resolving load order...")
    };

    let result = match config.to_bundle_options(&cwd).build() {
        Ok(result) => result,
        Err(err) => {
            spinner.fail("Build failed");
            return Err(err.into());
        }
    };

    let written = match config.output_path(&cwd) {
        Some(path) => {
            spinner.set_message("Writing bundle...");
            match result.write_to(&path, config.overwrite) {
                Ok(written) => Some(written),
                Err(err) => {
                    spinner.fail("Could not write bundle");
                    return Err(err.into());
                }
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.content.as_bytes())?;
            stdout.flush()?;
            None
        }
    };

    spinner.finish(&format!("Bundled {} modules", result.stats.modules));

    if !quiet {
        if result.order.is_empty() {
            ui::warning(&format!(
                "No .{} files found under {}",
                config.extensions.join(", ."),
                config.root.display()
            ));
        }
        ui::print_build_summary(&result.stats, started.elapsed(), written.as_deref());
    }

    Ok(())
}
