//! `nsb order`

use std::io::Write;

use serde_json::json;

use crate::cli::OrderArgs;
use crate::commands::{display_path, resolve_cwd};
use crate::config::{ConfigOverrides, NsbConfig};
use crate::error::Result;

/// Print the resolved load order to stdout.
pub fn execute(args: OrderArgs, _quiet: bool) -> Result<()> {
    let cwd = resolve_cwd(args.source.cwd.as_deref())?;
    let config = NsbConfig::load(
        &ConfigOverrides::from(&args.source),
        args.source.config.as_deref(),
        &cwd,
    )?;

    let options = config.to_bundle_options(&cwd);
    let root = options.root.clone();
    let result = options.build()?;

    let order: Vec<String> = result
        .order
        .ids()
        .map(|id| display_path(&root, id.as_path()))
        .collect();
    let layers: Vec<Vec<String>> = result
        .order
        .layers()
        .iter()
        .map(|layer| layer.iter().map(|id| display_path(&root, id.as_path())).collect())
        .collect();

    let mut stdout = std::io::stdout().lock();
    if args.json {
        let value = if args.layers {
            json!({ "order": order, "layers": layers })
        } else {
            json!({ "order": order })
        };
        serde_json::to_writer_pretty(&mut stdout, &value)?;
        writeln!(stdout)?;
    } else if args.layers {
        for (idx, layer) in layers.iter().enumerate() {
            writeln!(stdout, "# layer {idx}")?;
            for path in layer {
                writeln!(stdout, "{path}")?;
            }
        }
    } else {
        for path in &order {
            writeln!(stdout, "{path}")?;
        }
    }
    stdout.flush()?;

    Ok(())
}
