//! Driver and runtime assembly
//!
//! Places a freshly built compiler driver and its shared runtime library
//! into a sysroot skeleton. Codegen backends and target binaries are
//! populated by later stages, so their directories are created empty.

use std::path::PathBuf;

use crate::core::layout::SysrootLayout;
use crate::core::report::{AssemblyReport, Operation};
use crate::error::{FilesystemError, SysrootError};
use crate::infra::filesystem;

/// Driver assembly options
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Compiler driver binary, installed as `bin/rustc`
    pub driver: PathBuf,
    /// Sysroot root
    pub out_dir: PathBuf,
    /// Target triple
    pub target: String,
    /// Shared runtime library, installed under `lib/` with its own name
    pub runtime_lib: PathBuf,
}

/// Assemble a sysroot from a driver binary and its runtime library
///
/// Content already present in `out_dir` is left alone apart from the two
/// destination files, which are replaced. Running twice with the same
/// inputs yields the same tree.
pub fn assemble_driver(options: &DriverOptions) -> Result<AssemblyReport, SysrootError> {
    let layout = SysrootLayout::new(&options.out_dir, &options.target);
    let mut report = AssemblyReport::new(
        Operation::AssembleDriver,
        options.out_dir.clone(),
        options.target.clone(),
    );

    filesystem::require_file(&options.driver)?;
    filesystem::require_file(&options.runtime_lib)?;
    let runtime_name = options
        .runtime_lib
        .file_name()
        .ok_or_else(|| FilesystemError::NoFileName {
            path: options.runtime_lib.clone(),
        })?;

    for dir in layout.skeleton_dirs() {
        filesystem::create_dir_all(&dir)?;
    }

    let runtime_dest = layout.lib_dir().join(runtime_name);
    filesystem::copy_file(&options.runtime_lib, &runtime_dest)?;
    report.record(runtime_dest);

    let driver_dest = layout.driver_path();
    filesystem::copy_file(&options.driver, &driver_dest)?;
    report.record(driver_dest);

    tracing::info!(
        "Assembled driver sysroot for {} at {}",
        options.target,
        options.out_dir.display()
    );
    Ok(report)
}
