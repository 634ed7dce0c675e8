//! Configuration types for the verifier
//!
//! Defines the configuration structures used throughout the binary.

use std::path::PathBuf;

/// Output format for verification results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary only (minimal JSON)
    Summary,
    /// Complete per-check results with failure details
    Full,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Full => write!(f, "full"),
        }
    }
}

/// Configuration for a verification run
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Input path (manifest file or directory)
    pub input_path: PathBuf,

    /// Output file path (None means console-only output)
    pub output_file: Option<PathBuf>,

    /// Contract file overriding the default expected values
    pub contract_file: Option<PathBuf>,

    /// Output format
    pub output_format: OutputFormat,

    /// Suppress progress output
    pub quiet: bool,
}

/// Result of a verification run
#[derive(Debug)]
pub struct RunSummary {
    /// Total units verified
    pub total_units: usize,

    /// Units where every check passed
    pub passed: usize,

    /// Units with at least one failed check
    pub failed: usize,

    /// Execution errors outside of check results
    pub errors: usize,

    /// Total run duration
    pub duration: std::time::Duration,
}

impl RunSummary {
    /// Create a new run summary
    pub fn new(total_units: usize) -> Self {
        Self {
            total_units,
            passed: 0,
            failed: 0,
            errors: 0,
            duration: std::time::Duration::ZERO,
        }
    }

    /// Get the exit code based on results
    pub fn exit_code(&self) -> i32 {
        if self.errors > 0 {
            2
        } else if self.failed > 0 {
            1
        } else {
            0
        }
    }
}
