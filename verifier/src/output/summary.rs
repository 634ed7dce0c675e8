//! Summary builder
//!
//! Builds minimal summary output with pass/fail counts.

use metadata_kit::result::UnitReport;

/// Build a unified summary JSON from all unit reports
pub fn build_summary(reports: &[UnitReport]) -> serde_json::Value {
    let mut total_passed = 0;
    let mut total_failed = 0;
    let mut units = Vec::new();

    for report in reports {
        if report.unit_passed() {
            total_passed += 1;
        } else {
            total_failed += 1;
        }

        units.push(build_unit_summary(report));
    }

    serde_json::json!({
        "envelope": super::build_envelope(),
        "summary": {
            "total_units": reports.len(),
            "passed": total_passed,
            "failed": total_failed
        },
        "units": units
    })
}

/// Build summary for a single unit
fn build_unit_summary(report: &UnitReport) -> serde_json::Value {
    serde_json::json!({
        "unit": report.unit_name,
        "passed": report.unit_passed(),
        "checks": {
            "total": report.results.len(),
            "passed": report.passed_count(),
            "failed": report.failed_count()
        }
    })
}
