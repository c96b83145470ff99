//! Owning-symbol index.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::ModuleId;

/// Who owns a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
    None,
    Unique(&'a ModuleId),
    Ambiguous(&'a [ModuleId]),
}

/// Maps owning symbols to the modules that claim them.
///
/// Ownership is expected to be unique but is not enforced here; a symbol
/// claimed by several modules is recorded with all of its owners.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    owners: FxHashMap<String, Vec<ModuleId>>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` owns `symbol`. Empty symbols are ignored.
    pub fn insert(&mut self, symbol: impl Into<String>, id: ModuleId) {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return;
        }
        let owners = self.owners.entry(symbol).or_default();
        if !owners.contains(&id) {
            owners.push(id);
            owners.sort();
        }
    }

    pub fn owner(&self, symbol: &str) -> Owner<'_> {
        match self.owners.get(symbol).map(Vec::as_slice) {
            None | Some([]) => Owner::None,
            Some([id]) => Owner::Unique(id),
            Some(ids) => Owner::Ambiguous(ids),
        }
    }

    /// All owned symbols, sorted. This is the extraction universe.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.owners.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Symbols claimed by more than one module, sorted by symbol.
    pub fn duplicates(&self) -> Vec<(&str, &[ModuleId])> {
        let mut duplicates: Vec<(&str, &[ModuleId])> = self
            .owners
            .iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(symbol, ids)| (symbol.as_str(), ids.as_slice()))
            .collect();
        duplicates.sort_by(|a, b| a.0.cmp(b.0));
        duplicates
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Map raw references to the ids of the modules owning them.
///
/// References with no owner or with more than one owner are dropped: they
/// produce no dependency edge and no error.
pub fn resolve_symbols_to_ids<I, S>(references: I, index: &SymbolIndex) -> BTreeSet<ModuleId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    references
        .into_iter()
        .filter_map(|reference| {
            let reference = reference.as_ref();
            match index.owner(reference) {
                Owner::Unique(id) => Some(id.clone()),
                Owner::None => {
                    trace!(reference, "dropping unowned reference");
                    None
                }
                Owner::Ambiguous(ids) => {
                    trace!(reference, owners = ids.len(), "dropping ambiguous reference");
                    None
                }
            }
        })
        .collect()
}
