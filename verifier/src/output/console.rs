//! Console output formatting
//!
//! Provides formatted console output for verification results.

use metadata_kit::result::UnitReport;

/// Print unit reports to console in a human-readable format
pub fn print_reports(reports: &[UnitReport]) {
    if reports.is_empty() {
        return;
    }

    println!();
    println!("╔═══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                           VERIFICATION RESULTS                                ║");
    println!("╚═══════════════════════════════════════════════════════════════════════════════╝");
    println!();

    for (index, report) in reports.iter().enumerate() {
        print_unit_report(index + 1, reports.len(), report);
    }

    print_summary_table(reports);
}

/// Print a progress line for one verified unit
pub fn print_progress_result(num: usize, total: usize, report: &UnitReport) {
    let (icon, color) = if report.unit_passed() {
        ("✓", "\x1b[32m")
    } else {
        ("✗", "\x1b[31m")
    };

    println!(
        "[{}/{}] {}{}\x1b[0m {} ({}/{} checks passed)",
        num,
        total,
        color,
        icon,
        report.unit_name,
        report.passed_count(),
        report.results.len()
    );
}

/// Print a single unit report
fn print_unit_report(num: usize, total: usize, report: &UnitReport) {
    let status_icon = if report.unit_passed() { "✓" } else { "✗" };
    let status_text = if report.unit_passed() { "PASS" } else { "FAIL" };
    let status_color = if report.unit_passed() {
        "\x1b[32m"
    } else {
        "\x1b[31m"
    }; // Green or Red
    let reset = "\x1b[0m";

    println!("┌───────────────────────────────────────────────────────────────────────────────┐");
    println!("│ Unit {}/{}: {}", num, total, report.unit_name);
    println!("├───────────────────────────────────────────────────────────────────────────────┤");
    println!(
        "│ Status:      {}{} {}{}",
        status_color, status_icon, status_text, reset
    );
    println!("│ Manifest:    {}", report.manifest_path.display());
    println!(
        "│ Checks:      {}/{} passed",
        report.passed_count(),
        report.results.len()
    );

    println!("├───────────────────────────────────────────────────────────────────────────────┤");
    for result in &report.results {
        let (icon, color) = if result.passed {
            ("✓", "\x1b[32m")
        } else {
            ("✗", "\x1b[31m")
        };
        println!(
            "│   {}{}{} {:<20} {}",
            color,
            icon,
            reset,
            result.check_name,
            truncate(&result.detail, 48)
        );
    }

    println!("└───────────────────────────────────────────────────────────────────────────────┘");
    println!();
}

/// Print summary table
fn print_summary_table(reports: &[UnitReport]) {
    let total = reports.len();
    let passed = reports.iter().filter(|r| r.unit_passed()).count();
    let failed = total - passed;

    let check_total: usize = reports.iter().map(|r| r.results.len()).sum();
    let check_passed: usize = reports.iter().map(|r| r.passed_count()).sum();

    println!("  SUMMARY");
    println!("  ───────────────────────────────");
    println!("  Units:        {} total", total);
    println!("  Passed:       \x1b[32m{}\x1b[0m", passed);
    println!("  Failed:       \x1b[31m{}\x1b[0m", failed);
    println!("  Checks:       {}/{} passed", check_passed, check_total);
    println!();
}

/// Truncate a detail line for the fixed-width unit block
fn truncate(line: &str, max: usize) -> String {
    if line.chars().count() > max {
        let prefix: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", prefix)
    } else {
        line.to_string()
    }
}
