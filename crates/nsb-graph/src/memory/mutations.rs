//! Value-returning mutation methods for ModuleGraph.

use std::sync::Arc;

use super::super::{Module, ModuleId};
use super::graph::{ModuleGraph, Node};

impl ModuleGraph {
    /// Return a graph with `module` added, replacing any module with the same id.
    ///
    /// Edges from other modules to this id are kept. Dependencies on ids not
    /// present in the graph are dropped; use [`ModuleGraph::from_modules`] to
    /// add modules that reference each other.
    pub fn insert(&self, module: Module) -> Self {
        self.with_modules(vec![module])
    }

    /// Return a graph without `id`, and without any edge naming `id`.
    ///
    /// Only modules that depended on `id` are rebuilt; every other slot is
    /// shared with `self`. Removing an unknown id returns an equal graph.
    pub fn remove(&self, id: &ModuleId) -> Self {
        let Some(removed) = self.slot_of(id) else {
            return self.clone();
        };

        let mut slots = self.slots.clone();
        slots[removed] = None;

        for slot in slots.iter_mut() {
            let Some(node) = slot else { continue };
            if node.dependencies.contains(&removed) {
                let mut rebuilt = Node::clone(&**node);
                rebuilt.dependencies.remove(&removed);
                *node = Arc::new(rebuilt);
            }
        }

        let mut index = (*self.index).clone();
        index.remove(id);

        Self {
            slots,
            index: Arc::new(index),
        }
    }

    /// Return the union of `self` and `other`.
    ///
    /// On conflicting ids the module from `other` wins, including its
    /// dependency set.
    pub fn merge(&self, other: &ModuleGraph) -> Self {
        self.with_modules(other.modules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, symbol: &str, deps: &[&str]) -> Module {
        Module::builder(id)
            .own_symbol(symbol)
            .dependencies(deps.iter().copied())
            .build()
    }

    #[test]
    fn test_insert_returns_new_graph() {
        let empty = ModuleGraph::new();
        let one = empty.insert(module("a.js", "A", &[]));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert!(one.contains(&ModuleId::new("a.js")));
    }

    #[test]
    fn test_insert_overwrites_and_keeps_incoming_edges() {
        let graph = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
        ]);
        let replaced = graph.insert(module("a.js", "Alpha", &[]));

        assert_eq!(replaced.len(), 2);
        let a = replaced.get(&ModuleId::new("a.js")).unwrap();
        assert_eq!(a.own_symbol.as_deref(), Some("Alpha"));
        assert!(replaced.dependencies(&ModuleId::new("b.js")).contains(&ModuleId::new("a.js")));
        // the original snapshot is untouched
        assert_eq!(
            graph.get(&ModuleId::new("a.js")).unwrap().own_symbol.as_deref(),
            Some("A")
        );
    }

    #[test]
    fn test_insert_drops_edges_to_absent_modules() {
        let graph = ModuleGraph::new().insert(module("b.js", "B", &["a.js"]));
        assert!(graph.dependencies(&ModuleId::new("b.js")).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_cascades_edges() {
        let graph = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
            module("c.js", "C", &["a.js", "b.js"]),
        ]);
        let a = ModuleId::new("a.js");
        let removed = graph.remove(&a);

        assert!(!removed.contains(&a));
        assert_eq!(removed.len(), 2);
        assert!(removed.dependencies(&ModuleId::new("b.js")).is_empty());
        assert_eq!(
            removed.dependencies(&ModuleId::new("c.js")).into_iter().collect::<Vec<_>>(),
            [ModuleId::new("b.js")]
        );
        // the original snapshot still has every edge
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(removed.edge_count(), 1);
    }

    #[test]
    fn test_remove_then_reinsert_does_not_revive_edges() {
        let graph = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
        ]);
        let a = ModuleId::new("a.js");
        let readded = graph.remove(&a).insert(module("a.js", "A", &[]));

        assert!(readded.contains(&a));
        assert!(readded.dependents(&a).is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let graph = ModuleGraph::from_modules([module("a.js", "A", &[])]);
        let same = graph.remove(&ModuleId::new("zzz.js"));
        assert_eq!(same.modules(), graph.modules());
    }

    #[test]
    fn test_remove_shares_unaffected_slots() {
        let graph = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
            module("c.js", "C", &[]),
        ]);
        let removed = graph.remove(&ModuleId::new("a.js"));

        let c_idx = graph.slot_of(&ModuleId::new("c.js")).unwrap();
        let b_idx = graph.slot_of(&ModuleId::new("b.js")).unwrap();
        let (Some(before_c), Some(after_c)) = (&graph.slots[c_idx], &removed.slots[c_idx]) else {
            panic!("c.js slot missing");
        };
        assert!(Arc::ptr_eq(before_c, after_c));
        let (Some(before_b), Some(after_b)) = (&graph.slots[b_idx], &removed.slots[b_idx]) else {
            panic!("b.js slot missing");
        };
        assert!(!Arc::ptr_eq(before_b, after_b));
    }

    #[test]
    fn test_merge_is_right_biased() {
        let left = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
        ]);
        let right = ModuleGraph::from_modules([
            module("b.js", "Beta", &[]),
            module("c.js", "C", &["b.js"]),
        ]);
        let merged = left.merge(&right);

        assert_eq!(merged.len(), 3);
        let b = merged.get(&ModuleId::new("b.js")).unwrap();
        assert_eq!(b.own_symbol.as_deref(), Some("Beta"));
        assert!(b.dependencies.is_empty());
        assert!(merged.dependencies(&ModuleId::new("c.js")).contains(&ModuleId::new("b.js")));
    }

    #[test]
    fn test_merge_keeps_edges_from_both_sides() {
        let left = ModuleGraph::from_modules([
            module("a.js", "A", &[]),
            module("b.js", "B", &["a.js"]),
        ]);
        let right = ModuleGraph::from_modules([
            module("c.js", "C", &[]),
            module("d.js", "D", &["c.js"]),
        ]);
        let merged = left.merge(&right);

        assert_eq!(merged.len(), 4);
        assert_eq!(merged.edge_count(), 2);
        assert!(merged.dependents(&ModuleId::new("a.js")).contains(&ModuleId::new("b.js")));
        assert!(merged.dependents(&ModuleId::new("c.js")).contains(&ModuleId::new("d.js")));
    }
}
