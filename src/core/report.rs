//! Assembly results
//!
//! Every operation returns an [`AssemblyReport`] describing what it
//! placed, which the CLI prints as text or JSON.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The three ways of producing a sysroot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Loose driver binary plus runtime library
    AssembleDriver,
    /// Existing compiler tree plus a list of library artifacts
    AssembleCompilerAndStdlib,
    /// Prebuilt standard-library and compiler tarballs
    SetupBootstrapToolchain,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssembleDriver => "assemble-driver",
            Self::AssembleCompilerAndStdlib => "assemble-compiler-and-stdlib",
            Self::SetupBootstrapToolchain => "setup-bootstrap-toolchain",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one completed assembly
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    /// Operation that produced the tree
    pub operation: Operation,
    /// Root of the produced sysroot
    pub out_dir: PathBuf,
    /// Target triple the tree was assembled for
    pub target: String,
    /// Files and directory trees placed into the sysroot, in order
    pub placed: Vec<PathBuf>,
}

impl AssemblyReport {
    pub(crate) fn new(operation: Operation, out_dir: PathBuf, target: String) -> Self {
        Self {
            operation,
            out_dir,
            target,
            placed: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, path: PathBuf) {
        self.placed.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_match_cli() {
        assert_eq!(Operation::AssembleDriver.to_string(), "assemble-driver");
        assert_eq!(
            serde_json::to_value(Operation::AssembleCompilerAndStdlib).unwrap(),
            "assemble-compiler-and-stdlib"
        );
        assert_eq!(
            serde_json::to_value(Operation::SetupBootstrapToolchain).unwrap(),
            Operation::SetupBootstrapToolchain.as_str()
        );
    }

    #[test]
    fn test_report_serializes() {
        let mut report = AssemblyReport::new(
            Operation::AssembleDriver,
            PathBuf::from("out"),
            "x86_64-unknown-linux-gnu".to_string(),
        );
        report.record(PathBuf::from("out/bin/rustc"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["operation"], "assemble-driver");
        assert_eq!(json["target"], "x86_64-unknown-linux-gnu");
        assert_eq!(json["placed"][0], "out/bin/rustc");
    }
}
