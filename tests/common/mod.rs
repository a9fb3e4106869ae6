//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use sha2::{Digest, Sha256};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Scratch area for a single test
///
/// Creates a temporary directory and provides utilities for laying out
/// input artifacts and inspecting produced sysroots.
pub struct TestWorkspace {
    /// Temporary directory for the test
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Absolute path of `name` inside the workspace
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create a directory in the workspace
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.join(name)).expect("Failed to read file")
    }

    /// Run the binary with `args` from the workspace directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_bootstrap-sysroot"))
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to execute bootstrap-sysroot")
    }

    /// Write an uncompressed tarball whose members are the files of
    /// `tree` under the single top-level directory `wrapper`
    pub fn create_tar(&self, name: &str, wrapper: &str, tree: &Path) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, tar_bytes(wrapper, tree)).expect("Failed to write tarball");
        path
    }

    /// Same as [`Self::create_tar`], gzip-compressed
    pub fn create_tar_gz(&self, name: &str, wrapper: &str, tree: &Path) -> PathBuf {
        use flate2::write::GzEncoder;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&tar_bytes(wrapper, tree))
            .expect("Failed to compress tarball");
        let path = self.join(name);
        std::fs::write(&path, encoder.finish().expect("Failed to finish gzip stream"))
            .expect("Failed to write tarball");
        path
    }

    /// Write a tarball with no members at all
    pub fn create_empty_tar(&self, name: &str) -> PathBuf {
        let builder = tar::Builder::new(Vec::new());
        let path = self.join(name);
        std::fs::write(&path, builder.into_inner().expect("Failed to finish tarball"))
            .expect("Failed to write tarball");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn tar_bytes(wrapper: &str, tree: &Path) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    builder
        .append_dir_all(wrapper, tree)
        .expect("Failed to append tree to tarball");
    builder.into_inner().expect("Failed to finish tarball")
}

/// Lay out the content of an upstream `rust-std` dist archive for `target`
/// (without the wrapper directory) under `root`
pub fn stdlib_dist_tree(root: &Path, target: &str) {
    let lib = root
        .join(format!("rust-std-{target}"))
        .join("lib/rustlib")
        .join(target)
        .join("lib");
    std::fs::create_dir_all(&lib).unwrap();
    std::fs::write(lib.join("libstd-abc123.rlib"), "std").unwrap();
    std::fs::write(lib.join("libcore-abc123.rlib"), "core").unwrap();
    std::fs::write(root.join("components"), format!("rust-std-{target}\n")).unwrap();
}

/// Lay out the content of an upstream `rustc` dist archive (without the
/// wrapper directory) under `root`
pub fn compiler_dist_tree(root: &Path) {
    let rustc = root.join("rustc");
    std::fs::create_dir_all(rustc.join("bin")).unwrap();
    std::fs::create_dir_all(rustc.join("lib")).unwrap();
    std::fs::write(rustc.join("bin/rustc"), "rustc").unwrap();
    std::fs::write(rustc.join("bin/rustdoc"), "rustdoc").unwrap();
    std::fs::write(rustc.join("lib/librustc_driver-abc123.so"), "driver").unwrap();
    std::fs::write(root.join("components"), "rustc\n").unwrap();
}

/// Fingerprint of a directory tree: relative paths, kinds and contents
pub fn tree_digest(root: &Path) -> String {
    let mut hasher = Sha256::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.expect("Failed to walk tree");
        let relative = entry.path().strip_prefix(root).unwrap();
        hasher.update(relative.to_string_lossy().as_bytes());
        if entry.file_type().is_file() {
            hasher.update(b"\0file\0");
            hasher.update(std::fs::read(entry.path()).unwrap());
        } else {
            hasher.update(b"\0dir\0");
        }
    }
    hex::encode(hasher.finalize())
}

/// Paths of every entry under `root`, relative and sorted
pub fn tree_listing(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|e| {
            e.unwrap()
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
