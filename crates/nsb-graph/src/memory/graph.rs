//! Core ModuleGraph structure.

use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::super::{Module, ModuleId};

/// A module as stored in the arena: dependencies are slot indices.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) id: ModuleId,
    pub(crate) own_symbol: Option<String>,
    pub(crate) dependencies: BTreeSet<usize>,
}

/// Immutable module dependency graph.
///
/// Every operation takes `&self` and returns a new graph; earlier snapshots
/// stay valid and unchanged. Invariants:
///
/// - every id occupies at most one live slot;
/// - every dependency index names a live slot;
/// - dependents are never stored, only derived from dependencies.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    /// Arena slots; `None` marks a removed module. Indices are never reused.
    pub(crate) slots: Vec<Option<Arc<Node>>>,
    /// Live id → slot index.
    pub(crate) index: Arc<FxHashMap<ModuleId, usize>>,
}

impl ModuleGraph {
    pub(crate) fn node(&self, idx: usize) -> Option<&Node> {
        self.slots.get(idx).and_then(|slot| slot.as_deref())
    }

    pub(crate) fn slot_of(&self, id: &ModuleId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Live slots as `(index, node)`, in slot order.
    pub(crate) fn live_nodes(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_deref().map(|node| (idx, node)))
    }

    /// Materialize a stored node as a public `Module`.
    pub(crate) fn to_module(&self, node: &Node) -> Module {
        Module {
            id: node.id.clone(),
            own_symbol: node.own_symbol.clone(),
            dependencies: node
                .dependencies
                .iter()
                .filter_map(|&dep| self.node(dep).map(|n| n.id.clone()))
                .collect(),
        }
    }
}
