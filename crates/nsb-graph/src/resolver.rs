//! Deterministic load-order resolution.
//!
//! Layered Kahn ordering: each layer holds the modules whose dependencies
//! were all emitted by earlier layers, sorted by id. The layer is the only
//! place where ties are broken, which makes the order reproducible for the
//! same module set regardless of insertion history.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use super::{Error, Module, ModuleGraph, ModuleId, Result};

/// A complete load order, with the layer each module was emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOrder {
    modules: Vec<Module>,
    layers: Vec<Vec<ModuleId>>,
}

impl ResolvedOrder {
    /// Modules in load order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Module ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &ModuleId> {
        self.modules.iter().map(|module| &module.id)
    }

    /// Resolution layers, in order; each layer is sorted by id.
    pub fn layers(&self) -> &[Vec<ModuleId>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }
}

/// Compute the load order of every module in `graph`.
///
/// # Errors
///
/// [`Error::CyclicDependency`] when some layer cannot be formed. No partial
/// order is returned.
pub fn resolve(graph: &ModuleGraph) -> Result<ResolvedOrder> {
    // Sorted by id, so slot order below is lexical order.
    let modules = graph.modules();
    let position: FxHashMap<&ModuleId, usize> = modules
        .iter()
        .enumerate()
        .map(|(idx, module)| (&module.id, idx))
        .collect();

    let mut pending = vec![0usize; modules.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); modules.len()];
    for (idx, module) in modules.iter().enumerate() {
        for dep in &module.dependencies {
            if let Some(&dep_idx) = position.get(dep) {
                pending[idx] += 1;
                dependents[dep_idx].push(idx);
            }
        }
    }

    let mut frontier: Vec<usize> = (0..modules.len()).filter(|&idx| pending[idx] == 0).collect();
    let mut emitted = vec![false; modules.len()];
    let mut order: Vec<usize> = Vec::with_capacity(modules.len());
    let mut layers: Vec<Vec<ModuleId>> = Vec::new();

    while !frontier.is_empty() {
        frontier.sort_unstable();
        debug!(layer = layers.len(), size = frontier.len(), "resolved layer");

        let mut next = Vec::new();
        for &idx in &frontier {
            emitted[idx] = true;
            for &dependent in &dependents[idx] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    next.push(dependent);
                }
            }
        }

        layers.push(frontier.iter().map(|&idx| modules[idx].id.clone()).collect());
        order.extend_from_slice(&frontier);
        frontier = next;
    }

    if order.len() < modules.len() {
        let remaining: Vec<usize> = (0..modules.len()).filter(|&idx| !emitted[idx]).collect();
        let cycle = find_cycle(&modules, &position, &emitted, &remaining);
        debug!(
            remaining = remaining.len(),
            emitted = order.len(),
            "resolution stalled on a cycle"
        );
        return Err(Error::CyclicDependency {
            remaining: remaining.iter().map(|&idx| modules[idx].id.clone()).collect(),
            cycle,
        });
    }

    let mut slots: Vec<Option<Module>> = modules.into_iter().map(Some).collect();
    let modules = order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect();

    Ok(ResolvedOrder { modules, layers })
}

/// Follow the smallest unresolved dependency from the smallest unresolved
/// module until a module repeats. Every unresolved module has at least one
/// unresolved dependency, so the walk always closes.
fn find_cycle(
    modules: &[Module],
    position: &FxHashMap<&ModuleId, usize>,
    emitted: &[bool],
    remaining: &[usize],
) -> Vec<ModuleId> {
    let Some(&start) = remaining.first() else {
        return Vec::new();
    };

    let mut path: Vec<usize> = Vec::new();
    let mut seen_at: FxHashMap<usize, usize> = FxHashMap::default();
    let mut current = start;

    loop {
        if let Some(&at) = seen_at.get(&current) {
            let mut cycle: Vec<ModuleId> = path[at..]
                .iter()
                .map(|&idx| modules[idx].id.clone())
                .collect();
            cycle.push(modules[current].id.clone());
            return cycle;
        }
        seen_at.insert(current, path.len());
        path.push(current);

        let next = modules[current]
            .dependencies
            .iter()
            .filter_map(|dep| position.get(dep).copied())
            .find(|&idx| !emitted[idx]);

        match next {
            Some(idx) => current = idx,
            // Unreachable for a stalled resolution; report the walk so far.
            None => return path.iter().map(|&idx| modules[idx].id.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> ModuleGraph {
        ModuleGraph::from_modules(edges.iter().map(|(id, deps)| {
            Module::builder(*id)
                .dependencies(deps.iter().copied())
                .build()
        }))
    }

    fn paths<'a>(ids: impl Iterator<Item = &'a ModuleId>) -> Vec<String> {
        ids.map(ModuleId::path_string).collect()
    }

    #[test]
    fn test_chain() {
        let order = resolve(&graph(&[("c", &["b"]), ("b", &["a"]), ("a", &[])])).unwrap();
        assert_eq!(paths(order.ids()), ["a", "b", "c"]);
        assert_eq!(order.layers().len(), 3);
    }

    #[test]
    fn test_layers_are_sorted() {
        let order = resolve(&graph(&[
            ("z", &[]),
            ("m", &["z"]),
            ("a", &["z"]),
            ("b", &[]),
        ]))
        .unwrap();

        assert_eq!(paths(order.ids()), ["b", "z", "a", "m"]);
        assert_eq!(paths(order.layers()[0].iter()), ["b", "z"]);
        assert_eq!(paths(order.layers()[1].iter()), ["a", "m"]);
    }

    #[test]
    fn test_layer_waits_for_slowest_dependency() {
        // d depends on a (layer 0) and c (layer 2), so it lands in layer 3
        let order = resolve(&graph(&[
            ("a", &[]),
            ("b", &["a"]),
            ("c", &["b"]),
            ("d", &["a", "c"]),
        ]))
        .unwrap();
        assert_eq!(order.layers().len(), 4);
        assert_eq!(paths(order.layers()[3].iter()), ["d"]);
    }

    #[test]
    fn test_empty_graph() {
        let order = resolve(&ModuleGraph::new()).unwrap();
        assert!(order.is_empty());
        assert!(order.layers().is_empty());
    }

    #[test]
    fn test_mutual_cycle() {
        let err = resolve(&graph(&[("a", &["b"]), ("b", &["a"]), ("c", &[])])).unwrap_err();
        match err {
            Error::CyclicDependency { remaining, cycle } => {
                assert_eq!(paths(remaining.iter()), ["a", "b"]);
                assert_eq!(paths(cycle.iter()), ["a", "b", "a"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle_behind_a_tail() {
        // "a" is stuck only because it depends on the b <-> c cycle
        let err = resolve(&graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["b"])])).unwrap_err();
        match err {
            Error::CyclicDependency { remaining, cycle } => {
                assert_eq!(paths(remaining.iter()), ["a", "b", "c"]);
                assert_eq!(paths(cycle.iter()), ["b", "c", "b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle_message_names_participants() {
        let err = resolve(&graph(&[("x.js", &["y.js"]), ("y.js", &["x.js"])])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("x.js -> y.js -> x.js"), "{message}");
        assert!(message.contains("2 module(s)"), "{message}");
    }

    #[test]
    fn test_into_modules_preserves_order() {
        let order = resolve(&graph(&[("b", &["a"]), ("a", &[])])).unwrap();
        let modules = order.clone().into_modules();
        assert_eq!(modules, order.modules());
        assert_eq!(order.len(), 2);
    }
}
