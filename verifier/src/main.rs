//! # Package Metadata Verifier
//!
//! Verifies that package units expose the expected metadata contract:
//! the unit must be loadable and its `version`, `author`, and `license`
//! fields must match the contract exactly.
//!
//! ## Usage
//!
//! ```bash
//! # Verify a single package
//! meta_verifier path/to/package.toml
//!
//! # Verify a directory of packages
//! meta_verifier /path/to/packages/
//!
//! # Specify output format
//! meta_verifier --format summary -o summary.json path/to/package/
//! ```
//!
//! ## Output Formats
//!
//! - **full** (default): Complete per-check results with failure details
//! - **summary**: Minimal output with pass/fail counts only
//!
//! Results are printed to the console; `--output` additionally writes
//! the selected format to a JSON file.

mod cli;
mod config;
mod discovery;
mod output;
mod runner;

use cli::{parse_args, print_help, CliResult};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("meta_verifier");

    let exit_code = match parse_args(&args) {
        CliResult::Help => {
            print_help(program_name);
            0
        }
        CliResult::Error(msg) => {
            eprintln!("Error: {}", msg);
            2
        }
        CliResult::Run(config) => match run(config) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}

/// Run the verification with the given configuration
fn run(config: config::VerifyConfig) -> Result<i32, Box<dyn std::error::Error>> {
    let targets = discovery::discover_manifests(&config.input_path)?;

    if targets.is_empty() {
        if !config.quiet {
            println!("No package manifests found in: {}", config.input_path.display());
        }
        return Ok(0);
    }

    let exit_code = runner::run_verify(&config, &targets)?;

    Ok(exit_code)
}
