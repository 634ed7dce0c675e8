//! Output generation module
//!
//! Provides builders for the verification output formats:
//! - Full results with per-check failure details
//! - Summary (minimal, counts only)
//! - Console (human-readable)
//!
//! Both JSON formats share an envelope carrying a run id, a generation
//! timestamp, and the tool identity, so saved results can be correlated
//! with the run that produced them.

mod console;
mod full;
mod summary;

pub use console::{print_progress_result, print_reports};
pub use full::build_full_report;
pub use summary::build_summary;

use metadata_kit::result::UnitReport;

use crate::config::OutputFormat;

/// Build output in the specified format
pub fn build_output(reports: &[UnitReport], format: OutputFormat) -> Result<String, OutputError> {
    let value = match format {
        OutputFormat::Full => build_full_report(reports)?,
        OutputFormat::Summary => build_summary(reports),
    };

    serde_json::to_string_pretty(&value).map_err(|e| OutputError::Serialization(e.to_string()))
}

/// Build the shared envelope for JSON outputs
pub(crate) fn build_envelope() -> serde_json::Value {
    serde_json::json!({
        "run_id": uuid::Uuid::new_v4().to_string(),
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "tool": {
            "name": "meta_verifier",
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Errors that can occur during output generation
#[derive(Debug)]
pub enum OutputError {
    /// Output could not be built
    Build(String),
    /// Serialization to JSON failed
    Serialization(String),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Build(msg) => write!(f, "Build error: {}", msg),
            OutputError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for OutputError {}
