//! Error types for bootstrap-sysroot
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// A required source file or directory does not exist
    #[error("Input not found: '{path}'")]
    InputMissing { path: PathBuf },

    /// A source path exists but is not a directory
    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    /// A source path has no usable file name
    #[error("Path has no file name: '{path}'")]
    NoFileName { path: PathBuf },

    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Merge destination lies inside the tree being merged
    #[error("Cannot merge '{from}' into '{to}': destination is inside the source")]
    DestinationInsideSource { from: PathBuf, to: PathBuf },

    /// Failed to walk a source tree
    #[error("Failed to read directory tree '{path}': {error}")]
    WalkDir { path: PathBuf, error: String },
}

/// Wrapper directory derivation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapperError {
    /// No member carries a wrapper directory name
    #[error("archive has no members")]
    Empty,

    /// A member lives outside the wrapper directory of the first member
    #[error("member '{found}' is outside wrapper directory '{expected}'")]
    MixedWrapper { expected: String, found: PathBuf },
}

/// Archive errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Archive file could not be opened
    #[error("Failed to open archive '{path}': {error}")]
    Open { path: PathBuf, error: String },

    /// Archive stream is corrupt or truncated
    #[error("Failed to read archive '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Compression format we cannot decode
    #[error("Unsupported compression '{format}' for archive '{path}'")]
    UnsupportedCompression { path: PathBuf, format: String },

    /// Member could not be written to disk
    #[error("Failed to extract '{member}' from archive '{path}': {error}")]
    Extract {
        path: PathBuf,
        member: PathBuf,
        error: String,
    },

    /// Member would be written outside the extraction directory
    #[error("Archive '{path}' contains unsafe member '{member}'")]
    UnsafeMember { path: PathBuf, member: PathBuf },

    /// Archive manifest does not have the expected wrapper structure
    #[error("Unexpected layout in archive '{path}'")]
    Layout {
        path: PathBuf,
        #[source]
        source: WrapperError,
    },

    /// Expected subtree is missing after extraction
    #[error("Archive '{path}' does not contain '{subtree}'")]
    MissingSubtree { path: PathBuf, subtree: PathBuf },
}

/// Argument file expansion errors
#[derive(Error, Debug)]
pub enum ArgfileError {
    /// Argument file could not be read
    #[error("Failed to read argument file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Argument files nest too deeply (likely a cycle)
    #[error("Argument file '{path}' nests deeper than {limit} levels")]
    TooDeep { path: PathBuf, limit: usize },
}

/// Top-level bootstrap-sysroot error type
#[derive(Error, Debug)]
pub enum SysrootError {
    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Archive error
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Required argument omitted on the command line
    #[error("Missing required argument {flag}")]
    MissingArgument { flag: &'static str },
}
