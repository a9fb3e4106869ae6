//! Default configuration values

/// Canonical file name of the compiler driver inside `bin/`
pub const DRIVER_NAME: &str = "rustc";

/// Directory holding driver executables
pub const BIN_DIR: &str = "bin";

/// Directory holding runtime libraries loaded by the driver
pub const LIB_DIR: &str = "lib";

/// Directory under `lib/` holding per-target subtrees
pub const RUSTLIB_DIR: &str = "rustlib";

/// Per-target directory for codegen backend shared objects
pub const CODEGEN_BACKENDS_DIR: &str = "codegen-backends";

/// Component directory prefix inside a standard-library archive
pub const STD_COMPONENT_PREFIX: &str = "rust-std-";

/// Component directory inside a compiler archive
pub const COMPILER_COMPONENT: &str = "rustc";

/// Prefix marking an argument as a reference to an argument file
pub const ARGFILE_PREFIX: char = '@';

/// Maximum nesting of argument files
pub const MAX_ARGFILE_DEPTH: usize = 8;

/// Prefix for temporary extraction directories
pub const SCRATCH_PREFIX: &str = "bootstrap-sysroot-";

/// Target triple this tool was built for, used when `--target` is omitted
pub const HOST_TARGET: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");
