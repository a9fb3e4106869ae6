//! Infrastructure layer
//!
//! Handles all filesystem side effects: directory creation, copying,
//! archive extraction and scratch space.

pub mod archive;
pub mod filesystem;
pub mod scratch;
