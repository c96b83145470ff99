//! Construction methods for ModuleGraph.

use std::sync::Arc;

use tracing::trace;

use super::super::Module;
use super::graph::{ModuleGraph, Node};

impl ModuleGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a graph from a complete set of modules.
    ///
    /// All ids are registered before any edge is wired, so modules may name
    /// each other in any order. Dependencies on ids outside the set are
    /// dropped. When an id repeats, the last module wins.
    pub fn from_modules<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = Module>,
    {
        Self::new().with_modules(modules.into_iter().collect())
    }

    /// Batch insertion shared by `from_modules`, `insert` and `merge`.
    pub(crate) fn with_modules(&self, modules: Vec<Module>) -> Self {
        let mut slots = self.slots.clone();
        let mut index = (*self.index).clone();

        // First pass: give every new id a slot
        for module in &modules {
            if !index.contains_key(&module.id) {
                index.insert(module.id.clone(), slots.len());
                slots.push(None);
            }
        }

        // Second pass: wire edges against the complete index
        for module in modules {
            let Some(&idx) = index.get(&module.id) else {
                continue;
            };

            let dependencies = module
                .dependencies
                .iter()
                .filter_map(|dep| {
                    let target = index.get(dep).copied();
                    if target.is_none() {
                        trace!(module = %module.id, dependency = %dep, "dropping edge to unknown module");
                    }
                    target
                })
                .collect();

            slots[idx] = Some(Arc::new(Node {
                id: module.id,
                own_symbol: module.own_symbol.filter(|symbol| !symbol.is_empty()),
                dependencies,
            }));
        }

        Self {
            slots,
            index: Arc::new(index),
        }
    }
}
