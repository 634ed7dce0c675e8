//! Metadata fields check
//!
//! Verifies `author` and `license` together against the contract.
//! Absence of either field is reported before any value mismatch.

use crate::contract::MetadataContract;
use crate::manifest::PackageUnit;
use crate::result::{CheckFailure, CheckResult};

/// Checks `author` and `license` against the contract.
pub struct MetadataFieldsCheck;

impl MetadataFieldsCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetadataFieldsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl super::MetadataCheck for MetadataFieldsCheck {
    fn id(&self) -> &'static str {
        "check_metadata"
    }

    fn name(&self) -> &'static str {
        "Package metadata"
    }

    fn run(&self, unit: &PackageUnit, contract: &MetadataContract) -> CheckResult {
        let package = &unit.manifest.package;

        let fields = [
            ("author", package.author.as_deref(), contract.author.as_str()),
            ("license", package.license.as_deref(), contract.license.as_str()),
        ];

        for (field, actual, _) in &fields {
            if actual.is_none() {
                return CheckResult::fail(
                    self.id(),
                    self.name(),
                    CheckFailure::AttributeMissing {
                        field: field.to_string(),
                    },
                );
            }
        }

        for (field, actual, expected) in &fields {
            let actual = actual.unwrap_or_default();
            if actual != *expected {
                return CheckResult::fail(
                    self.id(),
                    self.name(),
                    CheckFailure::AssertionFailure {
                        field: field.to_string(),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    },
                );
            }
        }

        CheckResult::pass(
            self.id(),
            self.name(),
            format!(
                "author = \"{}\", license = \"{}\"",
                contract.author, contract.license
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::MetadataCheck;
    use crate::manifest::{PackageManifest, PackageTable};
    use std::path::PathBuf;

    fn unit_with(author: Option<&str>, license: Option<&str>) -> PackageUnit {
        PackageUnit {
            manifest_path: PathBuf::from("pkg/package.toml"),
            name: "pkg".to_string(),
            manifest: PackageManifest {
                package: PackageTable {
                    name: Some("pkg".to_string()),
                    version: Some("1.0.0".to_string()),
                    author: author.map(str::to_string),
                    license: license.map(str::to_string),
                },
            },
        }
    }

    #[test]
    fn test_matching_metadata_passes() {
        let unit = unit_with(Some("Bosch"), Some("ISC"));
        let result = MetadataFieldsCheck::new().run(&unit, &MetadataContract::default());
        assert!(result.passed);
    }

    #[test]
    fn test_absent_license_is_attribute_missing() {
        let unit = unit_with(Some("Bosch"), None);
        let result = MetadataFieldsCheck::new().run(&unit, &MetadataContract::default());

        assert!(!result.passed);
        assert_eq!(
            result.failure,
            Some(CheckFailure::AttributeMissing {
                field: "license".to_string()
            })
        );
    }

    #[test]
    fn test_absent_author_reported_before_license_mismatch() {
        let unit = unit_with(None, Some("MIT"));
        let result = MetadataFieldsCheck::new().run(&unit, &MetadataContract::default());

        assert_eq!(
            result.failure,
            Some(CheckFailure::AttributeMissing {
                field: "author".to_string()
            })
        );
    }

    #[test]
    fn test_mismatched_license_is_assertion_failure() {
        let unit = unit_with(Some("Bosch"), Some("MIT"));
        let result = MetadataFieldsCheck::new().run(&unit, &MetadataContract::default());

        assert!(!result.passed);
        assert_eq!(
            result.failure,
            Some(CheckFailure::AssertionFailure {
                field: "license".to_string(),
                expected: "ISC".to_string(),
                actual: "MIT".to_string(),
            })
        );
    }

    #[test]
    fn test_mismatched_author_is_assertion_failure() {
        let unit = unit_with(Some("Siemens"), Some("ISC"));
        let result = MetadataFieldsCheck::new().run(&unit, &MetadataContract::default());

        assert!(!result.passed);
        assert_eq!(
            result.failure,
            Some(CheckFailure::AssertionFailure {
                field: "author".to_string(),
                expected: "Bosch".to_string(),
                actual: "Siemens".to_string(),
            })
        );
    }
}
