//! Scoped scratch directories
//!
//! A `ScratchDir` owns a temporary directory for the lifetime of one
//! operation. It is deleted recursively when dropped, so early returns
//! and `?` propagation never leave extracted archives behind.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::defaults::SCRATCH_PREFIX;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Temporary extraction directory removed on drop
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a scratch directory under `parent`, or the system temp dir
    pub fn new(parent: Option<&Path>) -> Result<Self, FilesystemError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);

        let result = match parent {
            Some(parent) => {
                filesystem::create_dir_all(parent)?;
                builder.tempdir_in(parent)
            }
            None => builder.tempdir(),
        };

        let dir = result.map_err(|e| FilesystemError::CreateDir {
            path: parent.map_or_else(std::env::temp_dir, Path::to_path_buf),
            error: e.to_string(),
        })?;
        tracing::debug!("Created scratch directory {}", dir.path().display());

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a named subdirectory, one per unpacked archive
    pub fn subdir(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Remove the directory now, reporting failures instead of ignoring them
    pub fn close(self) -> Result<(), FilesystemError> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| FilesystemError::RemoveDir {
            path: path.clone(),
            error: e.to_string(),
        })?;
        tracing::debug!("Removed scratch directory {}", path.display());
        Ok(())
    }
}
