//! # Metadata Contract
//!
//! Expected metadata values a package unit must expose. The default
//! contract pins the literals the shipped package is released under;
//! a contract file can override them for verifying other packages.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Expected version for the default contract.
pub const EXPECTED_VERSION: &str = "1.0.0";

/// Expected author for the default contract.
pub const EXPECTED_AUTHOR: &str = "Bosch";

/// Expected license identifier for the default contract.
pub const EXPECTED_LICENSE: &str = "ISC";

/// Expected literal values for the three metadata fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataContract {
    pub version: String,
    pub author: String,
    pub license: String,
}

impl Default for MetadataContract {
    fn default() -> Self {
        Self {
            version: EXPECTED_VERSION.to_string(),
            author: EXPECTED_AUTHOR.to_string(),
            license: EXPECTED_LICENSE.to_string(),
        }
    }
}

impl MetadataContract {
    /// Load a contract from a TOML file.
    ///
    /// The file carries a `[contract]` table; fields left out keep
    /// their default literal values.
    pub fn from_file(path: &Path) -> Result<Self, ContractError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ContractError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ContractFile = toml::from_str(&contents).map_err(|e| ContractError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let defaults = Self::default();
        Ok(Self {
            version: file.contract.version.unwrap_or(defaults.version),
            author: file.contract.author.unwrap_or(defaults.author),
            license: file.contract.license.unwrap_or(defaults.license),
        })
    }
}

/// Raw deserialized form of a contract file.
#[derive(Debug, Default, Deserialize)]
struct ContractFile {
    #[serde(default)]
    contract: ContractTable,
}

#[derive(Debug, Default, Deserialize)]
struct ContractTable {
    version: Option<String>,
    author: Option<String>,
    license: Option<String>,
}

/// Errors that can occur while loading a contract file
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("failed to read contract {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse contract {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
