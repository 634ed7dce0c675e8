//! Full result builder
//!
//! Builds complete results with per-check failure details.

use metadata_kit::result::{CheckFailure, CheckResult, UnitReport};

use super::OutputError;

/// Build a full JSON report containing all unit results in a single envelope
pub fn build_full_report(reports: &[UnitReport]) -> Result<serde_json::Value, OutputError> {
    if reports.is_empty() {
        return Err(OutputError::Build(
            "At least one unit report is required".to_string(),
        ));
    }

    let passed = reports.iter().filter(|r| r.unit_passed()).count();

    let units: Vec<serde_json::Value> = reports.iter().map(build_unit_result).collect();

    Ok(serde_json::json!({
        "envelope": super::build_envelope(),
        "summary": {
            "total_units": reports.len(),
            "passed": passed,
            "failed": reports.len() - passed
        },
        "units": units
    }))
}

/// Build the result object for a single unit
fn build_unit_result(report: &UnitReport) -> serde_json::Value {
    let checks: Vec<serde_json::Value> = report.results.iter().map(build_check_result).collect();

    serde_json::json!({
        "unit": report.unit_name,
        "manifest_path": report.manifest_path.display().to_string(),
        "passed": report.unit_passed(),
        "checks": checks
    })
}

/// Build the result object for a single check
fn build_check_result(result: &CheckResult) -> serde_json::Value {
    serde_json::json!({
        "id": result.check_id,
        "name": result.check_name,
        "passed": result.passed,
        "detail": result.detail,
        "failure": result.failure.as_ref().map(build_failure)
    })
}

/// Build the failure object for a failed check
fn build_failure(failure: &CheckFailure) -> serde_json::Value {
    match failure {
        CheckFailure::ImportFailure { reason } => serde_json::json!({
            "kind": failure.kind(),
            "reason": reason
        }),
        CheckFailure::AttributeMissing { field } => serde_json::json!({
            "kind": failure.kind(),
            "field": field
        }),
        CheckFailure::AssertionFailure {
            field,
            expected,
            actual,
        } => serde_json::json!({
            "kind": failure.kind(),
            "field": field,
            "expected": expected,
            "actual": actual
        }),
    }
}
