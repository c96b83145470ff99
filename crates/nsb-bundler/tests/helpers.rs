//! Shared test utilities for nsb-bundler tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary source tree.
pub struct Tree {
    pub dir: TempDir,
}

impl Tree {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (relative, content) in files {
            write_file(dir.path(), relative, content);
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Load-order paths relative to `root`, with `/` separators.
pub fn relative_order(result: &nsb_bundler::BundleResult, root: &Path) -> Vec<String> {
    result
        .order
        .ids()
        .map(|id| {
            id.as_path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}
