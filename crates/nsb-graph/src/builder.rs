//! Graph construction from a complete source snapshot.
//!
//! Building is a global analysis: every file's owning symbol must be known
//! before any file's references can be resolved, so the builder always runs
//! over a whole [`SourceSet`] and never streams.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    Error, Module, ModuleGraph, RegexExtractor, Result, SourceSet, SymbolExtractor, SymbolIndex,
    resolve_symbols_to_ids,
};

/// What to do when several modules claim the same owning symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPolicy {
    /// Log a warning; references to the symbol produce no edge.
    #[default]
    Lenient,
    /// Fail the build with [`Error::AmbiguousSymbol`].
    Strict,
}

/// Builds a [`ModuleGraph`] from source text.
///
/// ```rust
/// use nsb_graph::{GraphBuilder, ModuleId, SourceSet};
///
/// let sources = SourceSet::from_sources([
///     ("a.js", "A = {};"),
///     ("b.js", "B = { base: A };"),
/// ]);
/// let graph = GraphBuilder::new().build(&sources).unwrap();
/// assert!(graph.dependencies(&ModuleId::new("b.js")).contains(&ModuleId::new("a.js")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder<E = RegexExtractor> {
    extractor: E,
    policy: SymbolPolicy,
}

impl GraphBuilder<RegexExtractor> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SymbolExtractor> GraphBuilder<E> {
    /// Use a different extraction strategy.
    pub fn with_extractor<F: SymbolExtractor>(self, extractor: F) -> GraphBuilder<F> {
        GraphBuilder {
            extractor,
            policy: self.policy,
        }
    }

    pub fn policy(mut self, policy: SymbolPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract, index and resolve every source, then assemble the graph.
    ///
    /// # Errors
    ///
    /// Only [`Error::AmbiguousSymbol`], and only under [`SymbolPolicy::Strict`].
    pub fn build(&self, sources: &SourceSet) -> Result<ModuleGraph> {
        // Pass 1: owning symbols
        let owned: Vec<_> = sources
            .iter()
            .map(|file| {
                let own_symbol = self.extractor.own_symbol(&file.id, &file.content);
                (file, own_symbol)
            })
            .collect();

        // Pass 2: owner index
        let mut index = SymbolIndex::new();
        for (file, own_symbol) in &owned {
            if let Some(symbol) = own_symbol {
                index.insert(symbol.clone(), file.id.clone());
            }
        }
        self.check_duplicates(&index)?;

        // Pass 3: references against the complete universe
        let universe = index.symbols();
        let modules: Vec<Module> = owned
            .into_iter()
            .map(|(file, own_symbol)| {
                let references =
                    self.extractor
                        .references(&file.content, own_symbol.as_deref(), &universe);
                let mut dependencies = resolve_symbols_to_ids(&references, &index);
                dependencies.remove(&file.id);

                Module {
                    id: file.id.clone(),
                    own_symbol,
                    dependencies,
                }
            })
            .collect();

        // Pass 4: one graph from the whole snapshot
        let graph = ModuleGraph::from_modules(modules);
        debug!(
            modules = graph.len(),
            symbols = index.len(),
            edges = graph.edge_count(),
            "module graph built"
        );
        Ok(graph)
    }

    fn check_duplicates(&self, index: &SymbolIndex) -> Result<()> {
        for (symbol, owners) in index.duplicates() {
            match self.policy {
                SymbolPolicy::Strict => {
                    return Err(Error::AmbiguousSymbol {
                        symbol: symbol.to_string(),
                        owners: owners.to_vec(),
                    });
                }
                SymbolPolicy::Lenient => {
                    warn!(
                        symbol,
                        owners = owners.len(),
                        "owning symbol claimed by several modules; its references are ignored"
                    );
                }
            }
        }
        Ok(())
    }
}
