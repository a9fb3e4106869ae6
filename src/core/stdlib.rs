//! Standard library linking
//!
//! Copies an already assembled compiler tree into a new sysroot and adds
//! freshly built standard-library artifacts for one target, producing
//! the input for the next bootstrap stage.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::defaults::{BIN_DIR, LIB_DIR};
use crate::core::layout::SysrootLayout;
use crate::core::report::{AssemblyReport, Operation};
use crate::error::{FilesystemError, SysrootError};
use crate::infra::filesystem;

/// Stdlib linking options
#[derive(Debug, Clone)]
pub struct StdlibOptions {
    /// Existing sysroot providing `bin/` and `lib/`
    pub compiler_tree: PathBuf,
    /// Sysroot root to write
    pub out_dir: PathBuf,
    /// Target triple the libraries were built for
    pub target: String,
    /// Library artifacts, placed under `lib/rustlib/<target>/lib/`
    pub libs: Vec<PathBuf>,
}

/// Build a sysroot from a compiler tree plus standard library artifacts
///
/// The compiler tree's `bin/` and `lib/` are merged into the output:
/// files from the compiler tree win, files only present in the output
/// survive. Libraries keep their file names; when two share a name the
/// later one wins.
pub fn link_stdlib(options: &StdlibOptions) -> Result<AssemblyReport, SysrootError> {
    let layout = SysrootLayout::new(&options.out_dir, &options.target);
    let mut report = AssemblyReport::new(
        Operation::AssembleCompilerAndStdlib,
        options.out_dir.clone(),
        options.target.clone(),
    );

    // Check every input before the first write
    let compiler_bin = options.compiler_tree.join(BIN_DIR);
    let compiler_lib = options.compiler_tree.join(LIB_DIR);
    filesystem::require_dir(&compiler_bin)?;
    filesystem::require_dir(&compiler_lib)?;
    filesystem::require_outside(&compiler_bin, &layout.bin_dir())?;
    filesystem::require_outside(&compiler_lib, &layout.lib_dir())?;

    let mut names = HashSet::new();
    let mut placements = Vec::with_capacity(options.libs.len());
    for lib in &options.libs {
        filesystem::require_file(lib)?;
        let name = lib.file_name().ok_or_else(|| FilesystemError::NoFileName {
            path: lib.clone(),
        })?;
        if !names.insert(name) {
            tracing::warn!(
                "Library {} shadows an earlier library with the same name",
                lib.display()
            );
        }
        placements.push((lib, layout.target_lib_dir().join(name)));
    }

    filesystem::create_dir_all(layout.root())?;

    let copied = filesystem::merge_tree(&compiler_bin, &layout.bin_dir())?;
    tracing::info!("Copied {copied} files from {}", compiler_bin.display());
    report.record(layout.bin_dir());

    let copied = filesystem::merge_tree(&compiler_lib, &layout.lib_dir())?;
    tracing::info!("Copied {copied} files from {}", compiler_lib.display());
    report.record(layout.lib_dir());

    filesystem::create_dir_all(&layout.target_lib_dir())?;
    for (lib, dest) in placements {
        filesystem::copy_file(lib, &dest)?;
        report.record(dest);
    }

    tracing::info!(
        "Linked {} libraries for {} into {}",
        options.libs.len(),
        options.target,
        options.out_dir.display()
    );
    Ok(report)
}
