//! Integration tests for the bundle pipeline.
//!
//! Each test builds a real directory tree and runs discovery through
//! assembly.

mod helpers;

use std::sync::Arc;

use helpers::{Tree, relative_order};
use nsb_graph::test_utils::TestRuntime;
use nsb_bundler::{BundleOptions, Error, GraphError, SymbolPolicy};

#[test]
fn test_linear_chain() {
    let tree = Tree::new(&[
        ("c.js", "C = { parent: B };"),
        ("a.js", "A = {};"),
        ("b.js", "B = { parent: A };"),
    ]);

    let result = BundleOptions::new(tree.root()).build().unwrap();

    assert_eq!(relative_order(&result, tree.root()), ["a.js", "b.js", "c.js"]);
    assert_eq!(
        result.content,
        "A = {};\nB = { parent: A };\nC = { parent: B };"
    );
    assert_eq!(result.stats.modules, 3);
    assert_eq!(result.stats.edges, 2);
    assert_eq!(result.stats.layers, 3);
    assert_eq!(result.stats.bytes, result.content.len());
}

#[test]
fn test_nested_namespaces() {
    let tree = Tree::new(&[
        ("app/app.js", "App = { root: new Tree.Node() };"),
        ("tree/tree.js", "Tree = {};"),
        ("tree/tree.node.js", "Tree.Node = function () {};"),
        ("README.md", "App = nonsense"),
    ]);

    let result = BundleOptions::new(tree.root()).build().unwrap();

    assert_eq!(
        relative_order(&result, tree.root()),
        ["tree/tree.js", "tree/tree.node.js", "app/app.js"]
    );
}

#[test]
fn test_cycle_produces_no_bundle() {
    let tree = Tree::new(&[("a.js", "A = { peer: B };"), ("b.js", "B = { peer: A };")]);

    let err = BundleOptions::new(tree.root()).build().unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::CyclicDependency { .. })
    ));
}

#[test]
fn test_empty_directory() {
    let tree = Tree::new(&[]);

    let result = BundleOptions::new(tree.root()).build().unwrap();
    assert!(result.order.is_empty());
    assert_eq!(result.content, "");
    assert_eq!(result.stats.bytes, 0);
}

#[test]
fn test_missing_root() {
    let tree = Tree::new(&[]);
    let err = BundleOptions::new(tree.path("missing")).build().unwrap_err();
    assert!(matches!(err, Error::RootNotFound(_)));
}

#[test]
fn test_strict_directive_is_hoisted() {
    let tree = Tree::new(&[
        ("a.js", "'use strict';\nA = {};"),
        ("b.js", "'use strict';\nB = A;"),
    ]);

    let result = BundleOptions::new(tree.root()).build().unwrap();
    assert!(result.hoisted_strict);
    assert_eq!(result.content, "'use strict';\nA = {};\nB = A;");

    let verbatim = BundleOptions::new(tree.root())
        .hoist_strict(false)
        .build()
        .unwrap();
    assert_eq!(verbatim.content.matches("'use strict';").count(), 2);
}

#[test]
fn test_separator_and_extensions() {
    let tree = Tree::new(&[("a.js", "A = {}"), ("b.mjs", "B = A"), ("c.ts", "C = B")]);

    let result = BundleOptions::new(tree.root())
        .extensions(["js", "mjs"])
        .separator("\n;\n")
        .build()
        .unwrap();
    assert_eq!(result.content, "A = {}\n;\nB = A");
}

#[test]
fn test_duplicate_owner_policies() {
    let tree = Tree::new(&[
        ("one/util.js", "Util = {};"),
        ("two/util.js", "Util = {};"),
        ("app.js", "App = Util.run();"),
    ]);

    let lenient = BundleOptions::new(tree.root()).build().unwrap();
    assert_eq!(lenient.stats.edges, 0);
    assert_eq!(lenient.graph.duplicate_owners().len(), 1);

    let err = BundleOptions::new(tree.root())
        .symbol_policy(SymbolPolicy::Strict)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::AmbiguousSymbol { .. })
    ));
}

#[test]
fn test_unreadable_file_aborts() {
    let tree = Tree::new(&[("a.js", "A = {};"), ("b.js", "B = A;")]);
    let runtime = TestRuntime::new()
        .with_file(tree.path("a.js"), "A = {};")
        .fail(tree.path("b.js"), "permission denied");

    let err = BundleOptions::new(tree.root())
        .runtime(Arc::new(runtime))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::FileRead { .. })
    ));
}

#[test]
fn test_unowned_modules_are_counted() {
    let tree = Tree::new(&[("main.js", "App.start();"), ("app.js", "App = {};")]);

    let result = BundleOptions::new(tree.root()).build().unwrap();
    assert_eq!(result.stats.unowned, 1);
    assert_eq!(relative_order(&result, tree.root()), ["app.js", "main.js"]);
}

#[cfg(unix)]
#[test]
fn test_symlink_alias_keeps_owner_edges() {
    let tree = Tree::new(&[("real.js", "Real = {};"), ("user.js", "User = { base: Real };")]);
    std::os::unix::fs::symlink(tree.path("real.js"), tree.path("alias.js")).unwrap();

    let result = BundleOptions::new(tree.root()).build().unwrap();

    assert_eq!(relative_order(&result, tree.root()), ["real.js", "user.js"]);
    assert!(result.graph.unowned_modules().is_empty());
    assert!(
        result
            .graph
            .dependencies(&nsb_bundler::ModuleId::new(tree.path("user.js")))
            .contains(&nsb_bundler::ModuleId::new(tree.path("real.js")))
    );
    assert_eq!(result.content, "Real = {};\nUser = { base: Real };");
}
