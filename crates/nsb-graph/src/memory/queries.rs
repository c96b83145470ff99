//! Read-only queries on ModuleGraph.

use std::collections::BTreeSet;

use super::super::{Module, ModuleId, SymbolIndex};
use super::graph::ModuleGraph;

impl ModuleGraph {
    /// Number of live modules.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a module by id.
    pub fn get(&self, id: &ModuleId) -> Option<Module> {
        let idx = self.slot_of(id)?;
        self.node(idx).map(|node| self.to_module(node))
    }

    /// All module ids, sorted.
    pub fn ids(&self) -> Vec<ModuleId> {
        let mut ids: Vec<ModuleId> = self.index.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All modules, sorted by id.
    pub fn modules(&self) -> Vec<Module> {
        let mut modules: Vec<Module> = self
            .live_nodes()
            .map(|(_, node)| self.to_module(node))
            .collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));
        modules
    }

    /// Immediate dependencies of `id`. Empty for unknown ids.
    pub fn dependencies(&self, id: &ModuleId) -> BTreeSet<ModuleId> {
        self.get(id)
            .map(|module| module.dependencies)
            .unwrap_or_default()
    }

    /// Modules that depend on `id` directly. Derived on every call.
    pub fn dependents(&self, id: &ModuleId) -> BTreeSet<ModuleId> {
        let Some(target) = self.slot_of(id) else {
            return BTreeSet::new();
        };
        self.live_nodes()
            .filter(|(_, node)| node.dependencies.contains(&target))
            .map(|(_, node)| node.id.clone())
            .collect()
    }

    /// Total number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.live_nodes()
            .map(|(_, node)| node.dependencies.len())
            .sum()
    }

    /// Modules that declare no owning symbol, sorted.
    pub fn unowned_modules(&self) -> Vec<ModuleId> {
        let mut ids: Vec<ModuleId> = self
            .live_nodes()
            .filter(|(_, node)| node.own_symbol.is_none())
            .map(|(_, node)| node.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Owning-symbol index over the current modules.
    pub fn symbol_index(&self) -> SymbolIndex {
        let mut index = SymbolIndex::new();
        for (_, node) in self.live_nodes() {
            if let Some(symbol) = &node.own_symbol {
                index.insert(symbol.clone(), node.id.clone());
            }
        }
        index
    }

    /// Symbols claimed by more than one module, sorted by symbol.
    pub fn duplicate_owners(&self) -> Vec<(String, Vec<ModuleId>)> {
        self.symbol_index()
            .duplicates()
            .into_iter()
            .map(|(symbol, ids)| (symbol.to_string(), ids.to_vec()))
            .collect()
    }
}
