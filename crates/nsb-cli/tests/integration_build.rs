//! Integration tests for the build and check commands, driven through the
//! library API.

use std::fs;
use std::path::Path;

use nsb_cli::cli::{BuildArgs, CheckArgs, SourceArgs};
use nsb_cli::commands::{build, check};
use nsb_cli::error::{BuildError, CliError};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn source_args(project: &Path) -> SourceArgs {
    SourceArgs {
        root: Some("src".into()),
        cwd: Some(project.to_path_buf()),
        ..SourceArgs::default()
    }
}

#[test]
fn test_build_to_file() {
    let temp = TempDir::new().unwrap();
    let project = temp.path();
    write(project, "src/b.js", "B = { base: A };");
    write(project, "src/a.js", "'use strict';\nA = {};");

    let args = BuildArgs {
        source: source_args(project),
        out_file: Some("dist/bundle.js".into()),
        ..BuildArgs::default()
    };
    build::execute(args, true).unwrap();

    let bundle = fs::read_to_string(project.join("dist/bundle.js")).unwrap();
    assert_eq!(bundle, "'use strict';\nA = {};\nB = { base: A };");
}

#[test]
fn test_build_with_custom_extension() {
    let temp = TempDir::new().unwrap();
    let project = temp.path();
    write(project, "src/a.mjs", "A = {};");
    write(project, "src/b.js", "B = A;");

    let mut source = source_args(project);
    source.extensions = vec!["mjs".into()];
    let args = BuildArgs {
        source,
        out_file: Some("out.js".into()),
        ..BuildArgs::default()
    };
    build::execute(args, true).unwrap();

    assert_eq!(fs::read_to_string(project.join("out.js")).unwrap(), "A = {};");
}

#[test]
fn test_build_missing_root() {
    let temp = TempDir::new().unwrap();

    let args = BuildArgs {
        source: source_args(temp.path()),
        out_file: Some("out.js".into()),
        ..BuildArgs::default()
    };
    let err = build::execute(args, true).unwrap_err();
    assert!(matches!(err, CliError::Build(BuildError::RootNotFound(_))));
    assert!(!temp.path().join("out.js").exists());
}

#[test]
fn test_check_cycle_is_an_error() {
    let temp = TempDir::new().unwrap();
    let project = temp.path();
    write(project, "src/a.js", "A = B;");
    write(project, "src/b.js", "B = C;");
    write(project, "src/c.js", "C = A;");

    let err = check::execute(
        CheckArgs {
            source: source_args(project),
        },
        true,
    )
    .unwrap_err();

    match err {
        CliError::Build(BuildError::CircularDependency { cycle }) => {
            assert_eq!(cycle.lines().count(), 4);
            assert!(cycle.contains("a.js"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_check_clean_tree() {
    let temp = TempDir::new().unwrap();
    let project = temp.path();
    write(project, "src/a.js", "A = {};");
    write(project, "src/main.js", "A.start();");

    check::execute(
        CheckArgs {
            source: source_args(project),
        },
        false,
    )
    .unwrap();
}
