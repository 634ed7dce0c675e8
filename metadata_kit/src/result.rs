//! # Check Results
//!
//! Result and failure types produced by metadata checks, plus the
//! per-unit report that aggregates them.

use std::path::PathBuf;

use thiserror::Error;

/// Ways a metadata check can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// The unit could not be located or loaded; dependent checks are moot
    #[error("import failure: {reason}")]
    ImportFailure { reason: String },

    /// An expected metadata field is absent; fails that check only
    #[error("attribute missing: {field}")]
    AttributeMissing { field: String },

    /// A field is present but its value does not match the contract
    #[error("assertion failure: {field} expected \"{expected}\", got \"{actual}\"")]
    AssertionFailure {
        field: String,
        expected: String,
        actual: String,
    },
}

impl CheckFailure {
    /// Stable kind identifier for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckFailure::ImportFailure { .. } => "import_failure",
            CheckFailure::AttributeMissing { .. } => "attribute_missing",
            CheckFailure::AssertionFailure { .. } => "assertion_failure",
        }
    }
}

/// Outcome of a single check against a single unit
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Stable identifier of the check that produced this result
    pub check_id: &'static str,
    /// Human-readable check name
    pub check_name: &'static str,
    /// Whether the check passed
    pub passed: bool,
    /// Failure details when the check did not pass
    pub failure: Option<CheckFailure>,
    /// One-line detail message for console output
    pub detail: String,
}

impl CheckResult {
    /// Create a passing result
    pub fn pass(check_id: &'static str, check_name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            check_id,
            check_name,
            passed: true,
            failure: None,
            detail: detail.into(),
        }
    }

    /// Create a failing result
    pub fn fail(check_id: &'static str, check_name: &'static str, failure: CheckFailure) -> Self {
        let detail = failure.to_string();
        Self {
            check_id,
            check_name,
            passed: false,
            failure: Some(failure),
            detail,
        }
    }
}

/// All check results for one package unit
#[derive(Debug, Clone)]
pub struct UnitReport {
    /// Display name of the unit
    pub unit_name: String,
    /// Manifest path the unit was loaded from (or expected at)
    pub manifest_path: PathBuf,
    /// Results in registry order
    pub results: Vec<CheckResult>,
}

impl UnitReport {
    pub fn new(unit_name: String, manifest_path: PathBuf, results: Vec<CheckResult>) -> Self {
        Self {
            unit_name,
            manifest_path,
            results,
        }
    }

    /// Number of checks that passed
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of checks that failed
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    /// Whether every check passed
    pub fn unit_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}
