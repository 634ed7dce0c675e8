//! Core verification logic
//!
//! Handles check execution across the discovered units and result
//! collection.

use std::path::PathBuf;
use std::time::Instant;

use metadata_kit::checks::{CheckRegistry, RegistryError};
use metadata_kit::contract::{ContractError, MetadataContract};
use metadata_kit::manifest;
use metadata_kit::result::UnitReport;

use crate::config::{RunSummary, VerifyConfig};
use crate::output;

/// Run verification with the given configuration
pub fn run_verify(config: &VerifyConfig, targets: &[PathBuf]) -> Result<i32, RunError> {
    let start = Instant::now();

    log::info!("starting verification of {} unit(s)", targets.len());
    if !config.quiet {
        println!();
        println!("Package Metadata Verifier v{}", env!("CARGO_PKG_VERSION"));
        println!("Checking {} package unit(s)...", targets.len());
        println!();
    }

    let contract = load_contract(config)?;
    let registry = CheckRegistry::with_standard_checks().map_err(RunError::Registry)?;

    // Execute checks and collect per-unit reports
    let (reports, mut summary) = execute_checks(targets, &registry, &contract, config.quiet);

    summary.duration = start.elapsed();

    // Print detailed results to console
    if !config.quiet {
        output::print_reports(&reports);
        print_execution_info(summary.duration, config);
    }

    // Build and save output file only if explicitly requested
    if let Some(output_path) = &config.output_file {
        save_output(&reports, config)?;

        if !config.quiet {
            println!("Results saved to: {}", output_path.display());
            println!();
        }
    }

    log::info!(
        "verification completed: total={} passed={} failed={}",
        summary.total_units,
        summary.passed,
        summary.failed
    );

    Ok(summary.exit_code())
}

/// Execute checks on all discovered manifests
fn execute_checks(
    targets: &[PathBuf],
    registry: &CheckRegistry,
    contract: &MetadataContract,
    quiet: bool,
) -> (Vec<UnitReport>, RunSummary) {
    let mut reports: Vec<UnitReport> = Vec::new();
    let mut summary = RunSummary::new(targets.len());

    for (index, manifest_path) in targets.iter().enumerate() {
        let unit_num = index + 1;

        let report = match manifest::load_unit(manifest_path) {
            Ok(unit) => {
                let results = registry.run_all(&unit, contract);
                UnitReport::new(unit.name.clone(), manifest_path.clone(), results)
            }
            Err(e) => {
                log::error!("failed to load unit {}: {}", manifest_path.display(), e);
                let results = registry.report_unloadable(&e);
                UnitReport::new(
                    manifest::unit_name_from_path(manifest_path),
                    manifest_path.clone(),
                    results,
                )
            }
        };

        if report.unit_passed() {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }

        if !quiet {
            output::print_progress_result(unit_num, targets.len(), &report);
        }

        reports.push(report);
    }

    (reports, summary)
}

/// Load the metadata contract, from file when configured
fn load_contract(config: &VerifyConfig) -> Result<MetadataContract, RunError> {
    match &config.contract_file {
        Some(path) => {
            let contract = MetadataContract::from_file(path).map_err(RunError::Contract)?;
            log::info!("loaded contract from {}", path.display());
            Ok(contract)
        }
        None => Ok(MetadataContract::default()),
    }
}

/// Save output to file
fn save_output(reports: &[UnitReport], config: &VerifyConfig) -> Result<(), RunError> {
    let output_path = match &config.output_file {
        Some(path) => path,
        None => return Ok(()), // No output file specified, nothing to do
    };

    let json = output::build_output(reports, config.output_format).map_err(RunError::Output)?;

    std::fs::write(output_path, &json)
        .map_err(|e| RunError::WriteFile(output_path.display().to_string(), e))?;

    Ok(())
}

/// Print execution information
fn print_execution_info(duration: std::time::Duration, config: &VerifyConfig) {
    println!("────────────────────────────────────────────────────────────────────────────────");
    println!("  Duration:     {:.2}s", duration.as_secs_f64());
    if let Some(output_path) = &config.output_file {
        println!(
            "  Output:       {} ({})",
            output_path.display(),
            config.output_format
        );
    }
    println!("────────────────────────────────────────────────────────────────────────────────");
    println!();
}

/// Errors that can occur during verification
#[derive(Debug)]
pub enum RunError {
    /// Failed to create the check registry
    Registry(RegistryError),
    /// Failed to load the contract file
    Contract(ContractError),
    /// Failed to generate output
    Output(output::OutputError),
    /// Failed to write output file
    WriteFile(String, std::io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Registry(e) => write!(f, "Registry creation failed: {}", e),
            RunError::Contract(e) => write!(f, "Contract loading failed: {}", e),
            RunError::Output(e) => write!(f, "Output generation failed: {}", e),
            RunError::WriteFile(path, e) => write!(f, "Failed to write {}: {}", path, e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Registry(e) => Some(e),
            RunError::Contract(e) => Some(e),
            RunError::Output(e) => Some(e),
            RunError::WriteFile(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn create_test_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("runner_{}_{}", label, std::process::id()));
        let _ = fs::create_dir_all(&dir);
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    fn standard_registry() -> CheckRegistry {
        CheckRegistry::with_standard_checks().unwrap()
    }

    #[test]
    fn test_correct_unit_passes_all_checks() {
        let dir = create_test_dir("all_pass");
        let manifest = dir.join("package.toml");
        fs::write(
            &manifest,
            "[package]\nname = \"virtuverse\"\nversion = \"1.0.0\"\nauthor = \"Bosch\"\nlicense = \"ISC\"\n",
        )
        .unwrap();

        let registry = standard_registry();
        let contract = MetadataContract::default();
        let (reports, summary) = execute_checks(&[manifest], &registry, &contract, true);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].unit_passed());
        assert_eq!(summary.exit_code(), 0);

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_version_mismatch_fails_run() {
        let dir = create_test_dir("ver_mismatch");
        let manifest = dir.join("package.toml");
        fs::write(
            &manifest,
            "[package]\nversion = \"1.0.1\"\nauthor = \"Bosch\"\nlicense = \"ISC\"\n",
        )
        .unwrap();

        let registry = standard_registry();
        let contract = MetadataContract::default();
        let (reports, summary) = execute_checks(&[manifest], &registry, &contract, true);

        // Importable and metadata still pass; only version fails
        assert_eq!(reports[0].passed_count(), 2);
        assert_eq!(reports[0].failed_count(), 1);
        assert_eq!(summary.exit_code(), 1);

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_missing_unit_is_import_failure() {
        let registry = standard_registry();
        let contract = MetadataContract::default();
        let missing = PathBuf::from("/nonexistent/pkg/package.toml");
        let (reports, summary) = execute_checks(&[missing], &registry, &contract, true);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].failed_count(), 3);
        assert_eq!(summary.failed, 1);
        assert_ne!(summary.exit_code(), 0);
    }
}
