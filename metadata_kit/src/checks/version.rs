//! Version check
//!
//! Literal string equality against the contract's expected version.
//! No semantic-version parsing is involved.

use crate::contract::MetadataContract;
use crate::manifest::PackageUnit;
use crate::result::{CheckFailure, CheckResult};

/// Checks `version` against the contract.
pub struct VersionCheck;

impl VersionCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VersionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl super::MetadataCheck for VersionCheck {
    fn id(&self) -> &'static str {
        "check_version"
    }

    fn name(&self) -> &'static str {
        "Package version"
    }

    fn run(&self, unit: &PackageUnit, contract: &MetadataContract) -> CheckResult {
        match unit.manifest.package.version.as_deref() {
            None => CheckResult::fail(
                self.id(),
                self.name(),
                CheckFailure::AttributeMissing {
                    field: "version".to_string(),
                },
            ),
            Some(actual) if actual == contract.version => CheckResult::pass(
                self.id(),
                self.name(),
                format!("version = \"{}\"", actual),
            ),
            Some(actual) => CheckResult::fail(
                self.id(),
                self.name(),
                CheckFailure::AssertionFailure {
                    field: "version".to_string(),
                    expected: contract.version.clone(),
                    actual: actual.to_string(),
                },
            ),
        }
    }
}
