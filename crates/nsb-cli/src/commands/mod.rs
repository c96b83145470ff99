//! Command implementations.
//!
//! Each command loads its configuration, runs the pipeline once and reports
//! on stderr. Only `build` (without an output file) and `order` write to
//! stdout.

pub mod build;
pub mod check;
pub mod order;

use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::error::Result;

/// Run `command`. `quiet` suppresses everything but errors and command
/// output.
pub fn dispatch(command: Command, quiet: bool) -> Result<()> {
    match command {
        Command::Build(args) => build::execute(args, quiet),
        Command::Order(args) => order::execute(args, quiet),
        Command::Check(args) => check::execute(args, quiet),
    }
}

/// Working directory for a command: `--cwd` (relative to the process
/// directory) or the process directory itself.
pub(crate) fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(match cwd {
        Some(dir) => current.join(dir),
        None => current,
    })
}

/// `path` relative to `root`, with forward slashes.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path() {
        let root = Path::new("/work/src");
        assert_eq!(display_path(root, Path::new("/work/src/a/b.js")), "a/b.js");
        assert_eq!(display_path(root, Path::new("/elsewhere/c.js")), "/elsewhere/c.js");
    }

    #[test]
    fn test_resolve_cwd() {
        let current = std::env::current_dir().unwrap();
        assert_eq!(resolve_cwd(None).unwrap(), current);
        assert_eq!(resolve_cwd(Some(Path::new("sub"))).unwrap(), current.join("sub"));

        let absolute = current.join("abs");
        assert_eq!(resolve_cwd(Some(&absolute)).unwrap(), absolute);
    }
}
