use nsb_graph::{ModuleGraph, ResolvedOrder};
use serde::Serialize;

/// Summary numbers for one bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    /// Modules in the bundle.
    pub modules: usize,
    /// Modules without an owning symbol.
    pub unowned: usize,
    /// Dependency edges in the graph.
    pub edges: usize,
    /// Resolution layers.
    pub layers: usize,
    /// Size of the bundle text in bytes.
    pub bytes: usize,
}

impl BundleStats {
    pub fn collect(graph: &ModuleGraph, order: &ResolvedOrder, text: &str) -> Self {
        Self {
            modules: order.len(),
            unowned: graph.unowned_modules().len(),
            edges: graph.edge_count(),
            layers: order.layers().len(),
            bytes: text.len(),
        }
    }
}
