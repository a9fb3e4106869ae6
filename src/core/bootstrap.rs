//! Bootstrap toolchain unpacking
//!
//! Builds a stage0 sysroot from two upstream dist tarballs: a `rust-std`
//! archive for the target and a `rustc` archive. Both carry a generated
//! wrapper directory at their root which is discovered from the archive
//! itself and stripped during relocation.

use std::path::{Path, PathBuf};

use crate::core::layout::{compiler_subtree, stdlib_subtree, wrapper_dir, SysrootLayout};
use crate::core::report::{AssemblyReport, Operation};
use crate::error::{ArchiveError, SysrootError};
use crate::infra::archive;
use crate::infra::filesystem;
use crate::infra::scratch::ScratchDir;

/// Bootstrap unpacking options
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Sysroot root to write
    pub out_dir: PathBuf,
    /// Target triple of the standard library archive
    pub target: String,
    /// `rust-std-<version>-<target>` archive
    pub stdlib_archive: PathBuf,
    /// `rustc-<version>-<host>` archive
    pub compiler_archive: PathBuf,
    /// Parent for the temporary extraction directory (system temp if unset)
    pub scratch_parent: Option<PathBuf>,
}

/// Unpack `archive` into its own scratch subdirectory and return the
/// on-disk path of `subtree(wrapper)`
fn unpack_subtree(
    archive: &Path,
    dest: &Path,
    subtree: impl FnOnce(&str) -> PathBuf,
) -> Result<PathBuf, SysrootError> {
    let members = archive::unpack(archive, dest)?;
    let wrapper = wrapper_dir(&members).map_err(|source| ArchiveError::Layout {
        path: archive.to_path_buf(),
        source,
    })?;
    tracing::debug!("Archive {} wraps its content in {wrapper}", archive.display());

    let subtree = subtree(&wrapper);
    let extracted = dest.join(&subtree);
    if !extracted.is_dir() {
        return Err(ArchiveError::MissingSubtree {
            path: archive.to_path_buf(),
            subtree,
        }
        .into());
    }
    Ok(extracted)
}

/// Combine a standard library archive and a compiler archive into a sysroot
///
/// The standard library lands in `lib/rustlib/<target>/`, the compiler
/// archive's `rustc/` component is merged into the sysroot root. Scratch
/// space is released on every exit path; a failure part way may leave
/// the output partially written.
pub fn unpack_bootstrap(options: &BootstrapOptions) -> Result<AssemblyReport, SysrootError> {
    let layout = SysrootLayout::new(&options.out_dir, &options.target);
    let mut report = AssemblyReport::new(
        Operation::SetupBootstrapToolchain,
        options.out_dir.clone(),
        options.target.clone(),
    );

    let scratch = ScratchDir::new(options.scratch_parent.as_deref())?;

    let stdlib = unpack_subtree(&options.stdlib_archive, &scratch.subdir("stdlib"), |w| {
        stdlib_subtree(w, &options.target)
    })?;
    let copied = filesystem::merge_tree(&stdlib, &layout.target_dir())?;
    tracing::info!(
        "Placed {copied} standard library files from {}",
        options.stdlib_archive.display()
    );
    report.record(layout.target_dir());

    let compiler = unpack_subtree(
        &options.compiler_archive,
        &scratch.subdir("compiler"),
        compiler_subtree,
    )?;
    let copied = filesystem::merge_tree(&compiler, layout.root())?;
    tracing::info!(
        "Placed {copied} compiler files from {}",
        options.compiler_archive.display()
    );
    report.record(layout.root().to_path_buf());

    scratch.close()?;
    Ok(report)
}
