//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners,
//! assembly reports, and error diagnostics.

use std::io::IsTerminal;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::level_filters::LevelFilter;

use crate::core::report::AssemblyReport;

/// How results and diagnostics are presented
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Only errors are printed
    pub quiet: bool,
    /// Reports are printed as JSON on stdout
    pub json: bool,
    /// Verbosity level from repeated `-v`
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Default log level implied by the flags
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }

    /// Whether interactive progress may be drawn on stderr
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json && std::io::stderr().is_terminal()
    }
}

/// Create a spinner for operations with unknown duration
///
/// Returns a hidden spinner when progress output is disabled.
pub fn create_spinner(config: &OutputConfig, message: &str) -> ProgressBar {
    if !config.show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a finished assembly
pub fn print_report(config: &OutputConfig, report: &AssemblyReport) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if config.quiet {
        return Ok(());
    }

    println!(
        "{} {}: sysroot for {} at {}",
        status::SUCCESS,
        report.operation,
        report.target,
        report.out_dir.display()
    );
    if config.verbose > 0 {
        for path in &report.placed {
            println!("  • {}", path.display());
        }
    }
    Ok(())
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
