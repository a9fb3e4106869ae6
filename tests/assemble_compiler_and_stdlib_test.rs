//! Integration tests for `bootstrap-sysroot assemble-compiler-and-stdlib`
//!
//! - Copies the compiler tree's bin/ and lib/ into the output
//! - Places every library under lib/rustlib/<target>/lib/
//! - Merges into existing output without deleting destination-only files
//! - Accepts long library lists through argument files

mod common;

use assert_fs::prelude::*;
use common::{tree_digest, TestWorkspace};
use predicates::prelude::*;

const TARGET: &str = "aarch64-apple-darwin";

/// Helper to create an assembled compiler tree at `ct/`
fn create_compiler_tree(workspace: &TestWorkspace) {
    workspace.create_file("ct/bin/rustc", "rustc");
    workspace.create_file("ct/lib/libcompiler.so", "runtime");
    workspace.create_dir(&format!("ct/lib/rustlib/{TARGET}/codegen-backends"));
}

/// Helper to create the standard library artifacts
fn create_libs(workspace: &TestWorkspace) {
    workspace.create_file("build/libstd.rlib", "std");
    workspace.create_file("build/libcore.rlib", "core");
}

fn run_link(workspace: &TestWorkspace, out: &str) -> std::process::Output {
    workspace.run(&[
        "assemble-compiler-and-stdlib",
        "--libs",
        "build/libstd.rlib",
        "build/libcore.rlib",
        "--out-dir",
        out,
        "--target",
        TARGET,
        "--compiler-tree",
        "ct",
    ])
}

#[test]
fn test_link_produces_sysroot() {
    let workspace = TestWorkspace::new();
    create_compiler_tree(&workspace);
    create_libs(&workspace);

    let output = run_link(&workspace, "out2");

    assert!(
        output.status.success(),
        "assemble-compiler-and-stdlib failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(workspace.read_file("out2/bin/rustc"), "rustc");
    assert_eq!(workspace.read_file("out2/lib/libcompiler.so"), "runtime");
    assert_eq!(
        workspace.read_file(&format!("out2/lib/rustlib/{TARGET}/lib/libstd.rlib")),
        "std"
    );
    assert_eq!(
        workspace.read_file(&format!("out2/lib/rustlib/{TARGET}/lib/libcore.rlib")),
        "core"
    );
    assert!(workspace
        .join(&format!("out2/lib/rustlib/{TARGET}/codegen-backends"))
        .is_dir());
}

#[test]
fn test_link_merges_into_existing_output() {
    let workspace = TestWorkspace::new();
    create_compiler_tree(&workspace);
    create_libs(&workspace);
    let out = assert_fs::TempDir::new().unwrap();
    out.child("bin/rustc").write_str("stale rustc").unwrap();
    out.child("bin/cargo").write_str("cargo").unwrap();
    out.child("lib/libold.so").write_str("old").unwrap();

    let output = run_link(&workspace, out.path().to_str().unwrap());

    assert!(output.status.success());
    out.child("bin/rustc").assert("rustc");
    out.child("bin/cargo").assert("cargo");
    out.child("lib/libold.so").assert("old");
    out.child(format!("lib/rustlib/{TARGET}/lib/libstd.rlib"))
        .assert(predicate::path::is_file());
}

#[test]
fn test_link_is_repeatable() {
    let workspace = TestWorkspace::new();
    create_compiler_tree(&workspace);
    create_libs(&workspace);

    assert!(run_link(&workspace, "out").status.success());
    let first = tree_digest(&workspace.join("out"));
    assert!(run_link(&workspace, "out").status.success());

    assert_eq!(first, tree_digest(&workspace.join("out")));
}

#[test]
fn test_link_reads_libs_from_argument_file() {
    let workspace = TestWorkspace::new();
    create_compiler_tree(&workspace);
    create_libs(&workspace);
    workspace.create_file(
        "link.args",
        &format!(
            "--libs\nbuild/libstd.rlib\nbuild/libcore.rlib\n--out-dir\nout\n--target\n{TARGET}\n"
        ),
    );

    let output = workspace.run(&[
        "assemble-compiler-and-stdlib",
        "@link.args",
        "--compiler-tree",
        "ct",
    ]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        workspace.read_file(&format!("out/lib/rustlib/{TARGET}/lib/libcore.rlib")),
        "core"
    );
}

#[test]
fn test_link_missing_library_fails_before_writing() {
    let workspace = TestWorkspace::new();
    create_compiler_tree(&workspace);
    workspace.create_file("build/libstd.rlib", "std");

    let output = run_link(&workspace, "out");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("libcore.rlib"), "stderr: {stderr}");
    assert!(!workspace.join("out").exists());
}

#[test]
fn test_link_missing_compiler_lib_dir() {
    let workspace = TestWorkspace::new();
    workspace.create_file("ct/bin/rustc", "rustc");
    create_libs(&workspace);

    let output = run_link(&workspace, "out");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ct/lib"), "stderr: {stderr}");
}

#[test]
fn test_link_without_compiler_tree_flag() {
    let workspace = TestWorkspace::new();
    create_libs(&workspace);

    let output = workspace.run(&[
        "assemble-compiler-and-stdlib",
        "--libs",
        "build/libstd.rlib",
        "--out-dir",
        "out",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--compiler-tree"), "stderr: {stderr}");
}

#[test]
fn test_link_missing_argument_file() {
    let workspace = TestWorkspace::new();

    let output = workspace.run(&["assemble-compiler-and-stdlib", "@missing.args"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.args"), "stderr: {stderr}");
}
