use std::sync::Arc;

use nsb_graph::{GraphBuilder, NativeRuntime, Runtime, SourceSet, check_order, resolve};
use tracing::{debug, info};

use super::{BundleOptions, BundleResult};
use crate::assembler::Assembler;
use crate::discovery::discover;
use crate::output::BundleStats;
use crate::Result;

/// Run the whole pipeline for `options`.
///
/// Discovery, loading, graph construction, resolution and validation all
/// complete before the bundle text is assembled. Any failure aborts with a
/// single error and no result.
pub fn build(options: BundleOptions) -> Result<BundleResult> {
    options.validate()?;

    let paths = discover(&options.root, &options.extensions)?;

    let runtime: Arc<dyn Runtime> = options
        .runtime
        .clone()
        .unwrap_or_else(|| Arc::new(NativeRuntime));
    let sources = SourceSet::load(&paths, runtime.as_ref())?;

    let graph = GraphBuilder::new()
        .policy(options.symbol_policy)
        .build(&sources)?;
    let order = resolve(&graph)?;
    check_order(order.modules())?;
    debug!(layers = order.layers().len(), "load order validated");

    let assembled = Assembler::new()
        .separator(options.separator.as_str())
        .hoist_strict(options.hoist_strict)
        .assemble(&order, &sources)?;

    let stats = BundleStats::collect(&graph, &order, &assembled.text);
    info!(
        modules = stats.modules,
        bytes = stats.bytes,
        root = %options.root.display(),
        "bundle ready"
    );

    Ok(BundleResult {
        content: assembled.text,
        order,
        graph,
        hoisted_strict: assembled.hoisted_strict,
        stats,
    })
}
