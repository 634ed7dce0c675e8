//! Importable check
//!
//! Confirms the package unit was located and its manifest parsed.

use crate::contract::MetadataContract;
use crate::manifest::PackageUnit;
use crate::result::CheckResult;

/// Checks that the unit loaded at all.
///
/// A `PackageUnit` only exists after a successful load, so running this
/// check against one always passes; the failing path is produced by
/// `CheckRegistry::report_unloadable` when the load itself fails.
pub struct ImportableCheck;

impl ImportableCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImportableCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl super::MetadataCheck for ImportableCheck {
    fn id(&self) -> &'static str {
        "check_importable"
    }

    fn name(&self) -> &'static str {
        "Package importable"
    }

    fn run(&self, unit: &PackageUnit, _contract: &MetadataContract) -> CheckResult {
        CheckResult::pass(
            self.id(),
            self.name(),
            format!("loaded from {}", unit.manifest_path.display()),
        )
    }
}
