//! Configuration and constants
//!
//! There are no configuration files: every operation is configured by its
//! typed options struct, built from the command line. This module only
//! holds the fixed names of the sysroot layout contract.

pub mod defaults;
