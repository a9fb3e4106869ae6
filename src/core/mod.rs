//! Core assembly logic
//!
//! Each operation takes a typed options struct and produces a sysroot
//! tree, returning an [`report::AssemblyReport`]. Operations share no
//! state; they are alternative ways of producing the same layout.
//!
//! # Submodules
//!
//! - [`layout`] - Sysroot path contract and wrapper directory derivation
//! - [`driver`] - Driver and runtime library assembly
//! - [`stdlib`] - Compiler tree plus standard library artifacts
//! - [`bootstrap`] - Sysroot from upstream dist tarballs
//! - [`report`] - Assembly results

pub mod bootstrap;
pub mod driver;
pub mod layout;
pub mod report;
pub mod stdlib;
