//! # Package Manifest Loading
//!
//! Locates, reads, and parses `package.toml` manifests into loaded
//! package units.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name of a package unit manifest.
pub const MANIFEST_FILE: &str = "package.toml";

/// Raw deserialized form of a `package.toml` manifest.
///
/// All metadata fields are optional so that an absent field is detected
/// as a failed check rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub package: PackageTable,
}

/// The `[package]` table of a manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageTable {
    pub name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

/// A successfully loaded package unit.
///
/// Immutable once loaded; checks only read it.
#[derive(Debug, Clone)]
pub struct PackageUnit {
    /// Path the manifest was loaded from
    pub manifest_path: PathBuf,
    /// Display name of the unit
    pub name: String,
    /// Parsed manifest contents
    pub manifest: PackageManifest,
}

/// Errors that can occur while loading a package unit
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("manifest not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a package unit from its manifest path.
///
/// The unit's display name comes from the manifest's `name` field when
/// present, otherwise from the directory containing the manifest.
pub fn load_unit(manifest_path: &Path) -> Result<PackageUnit, LoadError> {
    if !manifest_path.is_file() {
        return Err(LoadError::NotFound {
            path: manifest_path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(manifest_path).map_err(|e| LoadError::Read {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;

    let manifest: PackageManifest = toml::from_str(&contents).map_err(|e| LoadError::Parse {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;

    let name = manifest
        .package
        .name
        .clone()
        .unwrap_or_else(|| unit_name_from_path(manifest_path));

    log::debug!("loaded package unit '{}' from {}", name, manifest_path.display());

    Ok(PackageUnit {
        manifest_path: manifest_path.to_path_buf(),
        name,
        manifest,
    })
}

/// Derive a unit name from the manifest path.
///
/// Uses the containing directory's name, falling back to the file stem.
pub fn unit_name_from_path(manifest_path: &Path) -> String {
    manifest_path
        .parent()
        .and_then(|p| p.file_name())
        .or_else(|| manifest_path.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package".to_string())
}
