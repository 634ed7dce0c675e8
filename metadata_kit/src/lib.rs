//! # Metadata Kit
//!
//! Metadata contract checks for loadable package units.
//! Provides manifest loading, the check trait, the standard checks,
//! and a registry for executing them.
//!
//! ## Modules
//!
//! - `manifest` - Locating, reading, and parsing `package.toml` manifests
//! - `contract` - Expected metadata values (version, author, license)
//! - `checks` - The check trait, the standard checks, and the registry
//! - `result` - Check results, failures, and per-unit reports
//!
//! ## Usage
//!
//! To verify a package unit:
//! 1. Build a `CheckRegistry` with the standard checks
//! 2. Load the unit with `manifest::load_unit()`
//! 3. Run `registry.run_all()` against the configured `MetadataContract`
//!
//! ```rust,ignore
//! use metadata_kit::checks::CheckRegistry;
//! use metadata_kit::contract::MetadataContract;
//! use metadata_kit::manifest;
//!
//! let registry = CheckRegistry::with_standard_checks()?;
//! let contract = MetadataContract::default();
//!
//! let unit = manifest::load_unit(Path::new("pkg/package.toml"))?;
//! let results = registry.run_all(&unit, &contract);
//! ```

pub mod checks;
pub mod contract;
pub mod manifest;
pub mod result;

/// Version this crate was built with.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author this crate was built with.
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// License identifier this crate was built with.
pub const LICENSE: &str = env!("CARGO_PKG_LICENSE");
