//! Sysroot layout contract
//!
//! The directory shape every assembly operation produces:
//!
//! ```text
//! <root>/
//!   bin/rustc
//!   lib/<runtime libraries>
//!   lib/rustlib/<target>/bin/
//!   lib/rustlib/<target>/lib/<standard library archives>
//!   lib/rustlib/<target>/codegen-backends/
//! ```
//!
//! Also home of the wrapper directory derivation for distribution
//! archives, kept free of I/O so it can be tested on plain listings.

use std::path::{Component, Path, PathBuf};

use crate::config::defaults::{
    BIN_DIR, CODEGEN_BACKENDS_DIR, COMPILER_COMPONENT, DRIVER_NAME, LIB_DIR, RUSTLIB_DIR,
    STD_COMPONENT_PREFIX,
};
use crate::error::WrapperError;

/// Paths of a sysroot rooted at `root` for a single target triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysrootLayout {
    root: PathBuf,
    target: String,
}

impl SysrootLayout {
    /// Create a layout for `target` rooted at `root`
    ///
    /// The target triple is opaque and used verbatim as a path segment.
    pub fn new(root: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            target: target.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `bin/`
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    /// `lib/`
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(LIB_DIR)
    }

    /// `lib/rustlib/`
    pub fn rustlib_dir(&self) -> PathBuf {
        self.lib_dir().join(RUSTLIB_DIR)
    }

    /// `lib/rustlib/<target>/`
    pub fn target_dir(&self) -> PathBuf {
        self.rustlib_dir().join(&self.target)
    }

    /// `lib/rustlib/<target>/bin/`
    pub fn target_bin_dir(&self) -> PathBuf {
        self.target_dir().join(BIN_DIR)
    }

    /// `lib/rustlib/<target>/lib/`
    pub fn target_lib_dir(&self) -> PathBuf {
        self.target_dir().join(LIB_DIR)
    }

    /// `lib/rustlib/<target>/codegen-backends/`
    pub fn codegen_backends_dir(&self) -> PathBuf {
        self.target_dir().join(CODEGEN_BACKENDS_DIR)
    }

    /// `bin/rustc`
    pub fn driver_path(&self) -> PathBuf {
        self.bin_dir().join(DRIVER_NAME)
    }

    /// Directories the driver assembler creates, parents first
    pub fn skeleton_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.bin_dir(),
            self.lib_dir(),
            self.target_dir(),
            self.codegen_backends_dir(),
            self.target_bin_dir(),
        ]
    }
}

/// Location of the per-target standard library inside an unpacked
/// `rust-std` archive
pub fn stdlib_subtree(wrapper: &str, target: &str) -> PathBuf {
    Path::new(wrapper)
        .join(format!("{STD_COMPONENT_PREFIX}{target}"))
        .join(LIB_DIR)
        .join(RUSTLIB_DIR)
        .join(target)
}

/// Location of the compiler tree inside an unpacked `rustc` archive
pub fn compiler_subtree(wrapper: &str) -> PathBuf {
    Path::new(wrapper).join(COMPILER_COMPONENT)
}

/// First normal component of a member path, skipping `./` prefixes
fn first_segment(member: &Path) -> Option<String> {
    member.components().find_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    })
}

/// Derive the wrapper directory name from an archive listing
///
/// Upstream dist archives put everything under a generated top-level
/// directory such as `rust-std-1.84.0-x86_64-unknown-linux-gnu`. The name
/// is the first segment of the first member; members without a normal
/// component (a bare `./`) are skipped. Every remaining member must live
/// under the same directory.
pub fn wrapper_dir<P: AsRef<Path>>(members: &[P]) -> Result<String, WrapperError> {
    let mut segments = members
        .iter()
        .filter_map(|m| first_segment(m.as_ref()).map(|s| (m.as_ref(), s)));

    let (_, wrapper) = segments.next().ok_or(WrapperError::Empty)?;

    if let Some((member, _)) = segments.find(|(_, s)| *s != wrapper) {
        return Err(WrapperError::MixedWrapper {
            expected: wrapper,
            found: member.to_path_buf(),
        });
    }

    Ok(wrapper)
}
