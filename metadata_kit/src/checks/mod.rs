//! # Metadata Checks
//!
//! The check trait, the standard checks, and the registry that runs them.
//!
//! Checks are independent: one failing never stops the others. When the
//! unit itself cannot be loaded, `CheckRegistry::report_unloadable`
//! produces the import failure plus failed-moot results for the checks
//! that would have read its fields.

mod importable;
mod metadata_fields;
mod version;

pub use importable::ImportableCheck;
pub use metadata_fields::MetadataFieldsCheck;
pub use version::VersionCheck;

use thiserror::Error;

use crate::contract::MetadataContract;
use crate::manifest::{LoadError, PackageUnit};
use crate::result::{CheckFailure, CheckResult};

/// A single metadata check against a loaded package unit
pub trait MetadataCheck {
    /// Stable identifier, used in structured output
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Run the check against a loaded unit
    fn run(&self, unit: &PackageUnit, contract: &MetadataContract) -> CheckResult;
}

/// Errors that can occur while building a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate check id: {id}")]
    DuplicateCheck { id: String },
}

/// Ordered set of checks to run against each unit
pub struct CheckRegistry {
    checks: Vec<Box<dyn MetadataCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the three standard checks:
    /// importable, version, and metadata fields.
    pub fn with_standard_checks() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(Box::new(ImportableCheck::new()))?;
        registry.register(Box::new(VersionCheck::new()))?;
        registry.register(Box::new(MetadataFieldsCheck::new()))?;
        Ok(registry)
    }

    /// Register a check. Check ids must be unique within a registry.
    pub fn register(&mut self, check: Box<dyn MetadataCheck>) -> Result<(), RegistryError> {
        if self.checks.iter().any(|c| c.id() == check.id()) {
            return Err(RegistryError::DuplicateCheck {
                id: check.id().to_string(),
            });
        }
        self.checks.push(check);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every registered check against a loaded unit
    pub fn run_all(&self, unit: &PackageUnit, contract: &MetadataContract) -> Vec<CheckResult> {
        self.checks
            .iter()
            .map(|check| check.run(unit, contract))
            .collect()
    }

    /// Build results for a unit that could not be loaded.
    ///
    /// The first registered check (importable) carries the import
    /// failure; every other check fails moot since there is no unit to
    /// read fields from.
    pub fn report_unloadable(&self, error: &LoadError) -> Vec<CheckResult> {
        let reason = error.to_string();
        self.checks
            .iter()
            .map(|check| {
                CheckResult::fail(
                    check.id(),
                    check.name(),
                    CheckFailure::ImportFailure {
                        reason: reason.clone(),
                    },
                )
            })
            .collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{PackageManifest, PackageTable};
    use std::path::PathBuf;

    fn unit_with(version: Option<&str>, author: Option<&str>, license: Option<&str>) -> PackageUnit {
        PackageUnit {
            manifest_path: PathBuf::from("pkg/package.toml"),
            name: "pkg".to_string(),
            manifest: PackageManifest {
                package: PackageTable {
                    name: Some("pkg".to_string()),
                    version: version.map(str::to_string),
                    author: author.map(str::to_string),
                    license: license.map(str::to_string),
                },
            },
        }
    }

    #[test]
    fn test_standard_registry_has_three_checks() {
        let registry = CheckRegistry::with_standard_checks().unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(VersionCheck::new())).unwrap();
        let result = registry.register(Box::new(VersionCheck::new()));
        assert!(matches!(result, Err(RegistryError::DuplicateCheck { .. })));
    }

    #[test]
    fn test_run_all_correct_unit_passes() {
        let registry = CheckRegistry::with_standard_checks().unwrap();
        let unit = unit_with(Some("1.0.0"), Some("Bosch"), Some("ISC"));
        let results = registry.run_all(&unit, &MetadataContract::default());

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn test_run_all_one_failure_does_not_stop_others() {
        // Missing license fails the metadata check only
        let registry = CheckRegistry::with_standard_checks().unwrap();
        let unit = unit_with(Some("1.0.0"), Some("Bosch"), None);
        let results = registry.run_all(&unit, &MetadataContract::default());

        assert_eq!(results.len(), 3);
        assert!(results[0].passed);
        assert!(results[1].passed);
        assert!(!results[2].passed);
        assert_eq!(
            results[2].failure,
            Some(CheckFailure::AttributeMissing {
                field: "license".to_string()
            })
        );
    }

    #[test]
    fn test_report_unloadable_fails_every_check() {
        let registry = CheckRegistry::with_standard_checks().unwrap();
        let error = LoadError::NotFound {
            path: PathBuf::from("/missing/package.toml"),
        };
        let results = registry.report_unloadable(&error);

        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(!result.passed);
            assert!(matches!(
                result.failure,
                Some(CheckFailure::ImportFailure { .. })
            ));
        }
    }
}
