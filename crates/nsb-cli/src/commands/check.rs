//! `nsb check`

use crate::cli::CheckArgs;
use crate::commands::{display_path, resolve_cwd};
use crate::config::{ConfigOverrides, NsbConfig};
use crate::error::Result;
use crate::ui;

/// Build, resolve and validate without emitting a bundle.
///
/// Cycles and (under the strict policy) ambiguous symbols fail the command.
/// Unowned modules and duplicate owners are reported but are not errors.
pub fn execute(args: CheckArgs, quiet: bool) -> Result<()> {
    let cwd = resolve_cwd(args.source.cwd.as_deref())?;
    let config = NsbConfig::load(
        &ConfigOverrides::from(&args.source),
        args.source.config.as_deref(),
        &cwd,
    )?;

    let options = config.to_bundle_options(&cwd);
    let root = options.root.clone();
    let result = options.build()?;

    if quiet {
        return Ok(());
    }

    let graph = &result.graph;
    for (symbol, owners) in graph.duplicate_owners() {
        let owners: Vec<String> = owners
            .iter()
            .map(|id| display_path(&root, id.as_path()))
            .collect();
        ui::warning(&format!(
            "Symbol '{}' is defined by {} files: {}",
            symbol,
            owners.len(),
            owners.join(", ")
        ));
    }

    let unowned = graph.unowned_modules();
    if !unowned.is_empty() {
        ui::info(&format!(
            "{} module(s) define no symbol of their own:",
            unowned.len()
        ));
        for id in &unowned {
            eprintln!("    {}", display_path(&root, id.as_path()));
        }
    }

    ui::success(&format!(
        "{} modules, {} edges, {} layers: load order is valid",
        result.stats.modules, result.stats.edges, result.stats.layers
    ));

    Ok(())
}
