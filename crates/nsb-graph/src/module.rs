use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ModuleId;

/// One discovered source file with its extracted identity and dependencies.
///
/// `dependencies` holds module ids, never symbol names. Dependents are not
/// stored here; ask the graph, which recomputes them from the dependency
/// relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    /// The identifier this file defines. `None` for an unowned module, which
    /// can never be a dependency target.
    pub own_symbol: Option<String>,
    pub dependencies: BTreeSet<ModuleId>,
}

impl Module {
    /// Create a new module builder with no owning symbol and no dependencies.
    pub fn builder(id: impl Into<ModuleId>) -> ModuleBuilder {
        ModuleBuilder {
            module: Self {
                id: id.into(),
                own_symbol: None,
                dependencies: BTreeSet::new(),
            },
        }
    }

    /// Returns true if the module defines an identifier.
    pub fn is_owned(&self) -> bool {
        self.own_symbol.is_some()
    }

    pub fn owns(&self, symbol: &str) -> bool {
        self.own_symbol.as_deref() == Some(symbol)
    }

    pub fn depends_on(&self, id: &ModuleId) -> bool {
        self.dependencies.contains(id)
    }
}

/// Builder for `Module`.
pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn own_symbol(mut self, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        self.module.own_symbol = (!symbol.is_empty()).then_some(symbol);
        self
    }

    pub fn dependency(mut self, id: impl Into<ModuleId>) -> Self {
        self.module.dependencies.insert(id.into());
        self
    }

    pub fn dependencies<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ModuleId>,
    {
        self.module
            .dependencies
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Module {
        self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symbol_means_unowned() {
        let module = Module::builder("a.js").own_symbol("").build();
        assert!(!module.is_owned());

        let module = Module::builder("a.js").own_symbol("A").build();
        assert!(module.owns("A"));
        assert!(!module.owns("B"));
    }

    #[test]
    fn test_dependencies_are_deduplicated() {
        let module = Module::builder("c.js")
            .dependency("a.js")
            .dependencies(["a.js", "./b.js"])
            .build();
        assert_eq!(module.dependencies.len(), 2);
        assert!(module.depends_on(&ModuleId::new("b.js")));
    }
}
