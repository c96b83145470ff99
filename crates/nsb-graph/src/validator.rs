//! Post-condition check for load orders.
//!
//! A failure here means the resolver produced a bad order, not that the
//! input was wrong.

use rustc_hash::FxHashMap;

use super::{Error, Module, ModuleId, Result};

/// Check that every dependency of every module appears strictly before it.
///
/// # Errors
///
/// [`Error::OrderInvariantViolation`] naming the first offending pair.
pub fn check_order(modules: &[Module]) -> Result<()> {
    let position: FxHashMap<&ModuleId, usize> = modules
        .iter()
        .enumerate()
        .map(|(idx, module)| (&module.id, idx))
        .collect();

    for (idx, module) in modules.iter().enumerate() {
        for dependency in &module.dependencies {
            let placed_before = position.get(dependency).is_some_and(|&at| at < idx);
            if !placed_before {
                return Err(Error::OrderInvariantViolation {
                    module: module.id.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Boolean form of [`check_order`].
pub fn validate(modules: &[Module]) -> bool {
    check_order(modules).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, deps: &[&str]) -> Module {
        Module::builder(id).dependencies(deps.iter().copied()).build()
    }

    #[test]
    fn test_valid_order() {
        let modules = [module("a", &[]), module("b", &["a"]), module("c", &["a", "b"])];
        assert!(validate(&modules));
        assert!(validate(&[]));
    }

    #[test]
    fn test_dependency_after_dependent() {
        let modules = [module("b", &["a"]), module("a", &[])];
        match check_order(&modules) {
            Err(Error::OrderInvariantViolation { module, dependency }) => {
                assert_eq!(module, ModuleId::new("b"));
                assert_eq!(dependency, ModuleId::new("a"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_dependency_is_a_violation() {
        assert!(!validate(&[module("b", &["a"])]));
    }

    #[test]
    fn test_self_dependency_is_a_violation() {
        assert!(!validate(&[module("a", &["a"])]));
    }
}
