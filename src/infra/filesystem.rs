//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
///
/// Existing directories are not an error.
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Fail with `InputMissing` unless `path` is an existing file
pub fn require_file(path: &Path) -> Result<(), FilesystemError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(FilesystemError::InputMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Fail unless `path` is an existing directory
pub fn require_dir(path: &Path) -> Result<(), FilesystemError> {
    if path.is_dir() {
        Ok(())
    } else if path.exists() {
        Err(FilesystemError::NotADirectory {
            path: path.to_path_buf(),
        })
    } else {
        Err(FilesystemError::InputMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Absolute, symlink-resolved form of `path`, which need not exist yet
///
/// The longest existing ancestor is canonicalized and the remaining
/// components are appended as given.
fn resolve(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return absolute,
        }
    }
}

/// Whether two existing paths name the same file once symlinks are resolved
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Fail when `to` lies strictly inside `from`
///
/// Merging a tree into its own subtree would re-copy what it has just
/// written. `to` may not exist yet.
pub fn require_outside(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    let (source, dest) = (resolve(from), resolve(to));
    if dest != source && dest.starts_with(&source) {
        return Err(FilesystemError::DestinationInsideSource {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    Ok(())
}

/// Copy a single file, replacing whatever entry sits at `to`
///
/// The old entry is unlinked first: it may be read-only, or a symlink
/// into another tree that must not be written through. When `to` already
/// is `from`, nothing is touched. Permission bits travel with the copy.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    require_file(from)?;

    let copy_err = |e: std::io::Error| FilesystemError::CopyFile {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    };

    if let Ok(meta) = std::fs::symlink_metadata(to) {
        if meta.is_file() && same_file(from, to) {
            tracing::debug!("{} is already in place", to.display());
            return Ok(());
        }
        if !meta.is_dir() {
            std::fs::remove_file(to).map_err(copy_err)?;
        }
    }

    std::fs::copy(from, to).map_err(copy_err)?;
    tracing::debug!("Copied {} -> {}", from.display(), to.display());
    Ok(())
}

/// Recursively copy the contents of `from` into `to`
///
/// Merge semantics: files present on both sides are overwritten, files
/// only present under `to` are left alone. Symlinks in the source are
/// followed and their targets copied. `to` must not lie inside `from`;
/// merging a tree onto itself copies nothing. Returns the number of files
/// copied.
pub fn merge_tree(from: &Path, to: &Path) -> Result<usize, FilesystemError> {
    require_dir(from)?;
    require_outside(from, to)?;
    create_dir_all(to)?;

    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| FilesystemError::WalkDir {
            path: e.path().unwrap_or(from).to_path_buf(),
            error: e.to_string(),
        })?;

        // Every entry yielded by the walk lives under `from`
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&dest)?;
        } else {
            copy_file(entry.path(), &dest)?;
            copied += 1;
        }
    }

    tracing::debug!(
        "Merged {copied} files from {} into {}",
        from.display(),
        to.display()
    );
    Ok(copied)
}
