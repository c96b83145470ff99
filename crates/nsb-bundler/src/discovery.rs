//! Source discovery.
//!
//! Walks the source root and returns every file whose extension is in the
//! configured list. The result is deduplicated by canonical path and sorted,
//! so it never depends on directory iteration order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::{Error, Result};

/// Extensions collected when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// Recursively collect source files under `root`.
///
/// Extensions are compared without a leading dot and case-sensitively.
/// Symlinked files are followed. Paths resolving to the same file are
/// reported once: under the path that is not a symlink, else under one
/// whose file name matches the target's, else under the first in sorted
/// order. The module id derives from this path, so the real name wins.
///
/// # Errors
///
/// [`Error::RootNotFound`] when `root` does not exist and
/// [`Error::Discovery`] when the walk itself fails (permissions, link loops).
pub fn discover<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| Error::Discovery {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted.as_ref() == ext));
        if matches {
            candidates.push(Candidate {
                path: path.clean(),
                is_symlink: entry.path_is_symlink(),
            });
        } else {
            trace!(path = %path.display(), "skipping file with unlisted extension");
        }
    }
    candidates.sort_by(|a, b| a.path.cmp(&b.path));

    let mut by_target: BTreeMap<PathBuf, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        let key = candidate
            .path
            .canonicalize()
            .unwrap_or_else(|_| candidate.path.clone());
        by_target.entry(key).or_default().push(candidate);
    }

    let mut files: Vec<PathBuf> = by_target
        .into_iter()
        .filter_map(|(target, aliases)| preferred_path(&target, aliases))
        .collect();
    files.sort();

    debug!(root = %root.display(), files = files.len(), "discovered sources");
    Ok(files)
}

struct Candidate {
    path: PathBuf,
    is_symlink: bool,
}

/// Pick the path reporting `target` among its sorted `aliases`.
fn preferred_path(target: &Path, aliases: Vec<Candidate>) -> Option<PathBuf> {
    if aliases.len() > 1 {
        trace!(
            target = %target.display(),
            aliases = aliases.len(),
            "collapsing paths to the same file"
        );
    }

    let position = aliases
        .iter()
        .position(|c| !c.is_symlink)
        .or_else(|| {
            aliases
                .iter()
                .position(|c| target.file_name().is_some() && c.path.file_name() == target.file_name())
        })
        .unwrap_or(0);

    aliases.into_iter().nth(position).map(|c| c.path)
}
