//! bootstrap-sysroot - assemble compiler sysroots for bootstrap stages
//!
//! A multi-stage compiler bootstrap needs, at every stage, a directory
//! tree laid out the way the compiler driver expects: `bin/rustc`, its
//! runtime libraries in `lib/`, and per-target standard libraries under
//! `lib/rustlib/<target>/`. This crate produces such trees from three
//! kinds of input.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line parsing, argument files and output formatting
//! - [`core`] - The layout contract and the three assembly operations
//! - [`infra`] - Filesystem, archive and scratch directory primitives
//! - [`config`] - Fixed names and defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
