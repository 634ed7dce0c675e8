//! Command-line interface parsing
//!
//! Handles argument parsing, validation, and help text generation.

use std::path::PathBuf;

use crate::config::{OutputFormat, VerifyConfig};

/// CLI parsing result
pub enum CliResult {
    /// Run verification with this configuration
    Run(VerifyConfig),
    /// Show help and exit
    Help,
    /// Error with message
    Error(String),
}

/// Parse command-line arguments
pub fn parse_args(args: &[String]) -> CliResult {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("meta_verifier");

    let mut input_path: Option<&str> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut contract_file: Option<PathBuf> = None;
    let mut quiet = false;
    let mut output_format = OutputFormat::Full;

    let mut i = 1;
    while i < args.len() {
        match args.get(i).map(|s| s.as_str()) {
            Some("--help" | "-h") => {
                return CliResult::Help;
            }
            Some("--quiet" | "-q") => {
                quiet = true;
            }
            Some("--output" | "-o") => {
                i += 1;
                match args.get(i) {
                    Some(val) => output_file = Some(PathBuf::from(val)),
                    None => return CliResult::Error("--output requires a filename".to_string()),
                }
            }
            Some("--contract" | "-c") => {
                i += 1;
                match args.get(i) {
                    Some(val) => contract_file = Some(PathBuf::from(val)),
                    None => return CliResult::Error("--contract requires a filename".to_string()),
                }
            }
            Some("--format" | "-f") => {
                i += 1;
                match args.get(i).map(|s| s.as_str()) {
                    Some("full") => output_format = OutputFormat::Full,
                    Some("summary") => output_format = OutputFormat::Summary,
                    Some(other) => {
                        return CliResult::Error(format!(
                            "Unknown format '{}'. Use: full, summary",
                            other
                        ));
                    }
                    None => return CliResult::Error("--format requires a value".to_string()),
                }
            }
            Some(arg) if !arg.starts_with('-') => {
                input_path = Some(arg);
            }
            Some(arg) => {
                return CliResult::Error(format!("Unknown option: {}", arg));
            }
            None => break,
        }
        i += 1;
    }

    // Validate input path
    let input_path = match input_path {
        Some(p) => PathBuf::from(p),
        None => {
            return CliResult::Error(format!(
                "Missing input path\nUsage: {} [OPTIONS] <package.toml|directory>",
                program_name
            ));
        }
    };

    if !input_path.exists() {
        return CliResult::Error(format!("Path not found: {}", input_path.display()));
    }

    if let Some(contract_path) = &contract_file {
        if !contract_path.is_file() {
            return CliResult::Error(format!(
                "Contract file not found: {}",
                contract_path.display()
            ));
        }
    }

    CliResult::Run(VerifyConfig {
        input_path,
        output_file,
        contract_file,
        output_format,
        quiet,
    })
}

/// Print full help text
pub fn print_help(program_name: &str) {
    println!("Package Metadata Verifier v{}", env!("CARGO_PKG_VERSION"));
    println!("Verifies package metadata contracts (version, author, license)\n");

    println!("USAGE:");
    println!(
        "    {} [OPTIONS] <package.toml>   Verify a single package manifest",
        program_name
    );
    println!(
        "    {} [OPTIONS] <directory>      Verify package(s) under a directory",
        program_name
    );
    println!(
        "    {} --help                     Show this help message\n",
        program_name
    );

    println!("OPTIONS:");
    println!("    -h, --help                  Show this help message");
    println!("    -q, --quiet                 Suppress console output");
    println!("    -o, --output <file>         Write results to JSON file (optional)");
    println!("    -c, --contract <file>       Load expected values from a contract TOML file");
    println!("    -f, --format <format>       Output format: full (default), summary");
    println!();

    println!("OUTPUT FORMATS:");
    println!("    full          Complete per-check results with failure details (default)");
    println!("    summary       Minimal output with pass/fail counts only");
    println!();

    println!("BEHAVIOR:");
    println!("    Each unit runs three checks: importable, version, metadata.");
    println!("    Checks are independent; a unit that cannot be loaded fails all three.");
    println!("    Results are always printed to the console (unless --quiet is set).");
    println!();

    println!("EXIT CODES:");
    println!("    0    All checks passed");
    println!("    1    One or more checks failed");
    println!("    2    Execution error");
    println!();

    println!("EXAMPLES:");
    println!(
        "    {} pkg/package.toml                       # Console output only",
        program_name
    );
    println!(
        "    {} --output results.json pkg/             # Console + file",
        program_name
    );
    println!(
        "    {} --quiet -f summary -o out.json pkgs/   # Summary to file, no console",
        program_name
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_flag() {
        let result = parse_args(&args(&["meta_verifier", "--help"]));
        assert!(matches!(result, CliResult::Help));
    }

    #[test]
    fn test_missing_input_path() {
        let result = parse_args(&args(&["meta_verifier"]));
        assert!(matches!(result, CliResult::Error(_)));
    }

    #[test]
    fn test_nonexistent_input_path() {
        let result = parse_args(&args(&["meta_verifier", "/definitely/not/here"]));
        match result {
            CliResult::Error(msg) => assert!(msg.contains("Path not found")),
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = parse_args(&args(&["meta_verifier", "-f", "attestation", "."]));
        assert!(matches!(result, CliResult::Error(_)));
    }

    #[test]
    fn test_run_config_defaults() {
        let result = parse_args(&args(&["meta_verifier", "."]));
        match result {
            CliResult::Run(config) => {
                assert_eq!(config.output_format, OutputFormat::Full);
                assert!(config.output_file.is_none());
                assert!(config.contract_file.is_none());
                assert!(!config.quiet);
            }
            _ => panic!("expected run config"),
        }
    }

    #[test]
    fn test_summary_format_and_quiet() {
        let result = parse_args(&args(&["meta_verifier", "-q", "-f", "summary", "."]));
        match result {
            CliResult::Run(config) => {
                assert_eq!(config.output_format, OutputFormat::Summary);
                assert!(config.quiet);
            }
            _ => panic!("expected run config"),
        }
    }

    #[test]
    fn test_output_requires_filename() {
        let result = parse_args(&args(&["meta_verifier", ".", "-o"]));
        assert!(matches!(result, CliResult::Error(_)));
    }
}
