//! Manifest discovery utilities
//!
//! Functions for locating `package.toml` manifests under an input path.

use std::path::{Path, PathBuf};

use metadata_kit::manifest::MANIFEST_FILE;

/// Discover package manifests from an input path.
///
/// A file path is taken as-is. A directory yields its own manifest when
/// present; otherwise the manifests of its immediate subdirectories.
/// A directory with no manifests at all yields its (absent) manifest
/// path so the run loop reports the unit as unloadable rather than
/// silently skipping it.
pub fn discover_manifests(input_path: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if input_path.is_file() {
        Ok(vec![input_path.to_path_buf()])
    } else if input_path.is_dir() {
        discover_in_directory(input_path)
    } else {
        Err(DiscoveryError::InvalidPath(input_path.to_path_buf()))
    }
}

/// Discover manifests under a directory (one level deep)
fn discover_in_directory(dir_path: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let own_manifest = dir_path.join(MANIFEST_FILE);
    if own_manifest.is_file() {
        return Ok(vec![own_manifest]);
    }

    let mut manifests = Vec::new();

    let entries = std::fs::read_dir(dir_path)
        .map_err(|e| DiscoveryError::ReadDir(dir_path.to_path_buf(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::ReadEntry(dir_path.to_path_buf(), e))?;
        let path = entry.path();

        if path.is_dir() {
            let manifest = path.join(MANIFEST_FILE);
            if manifest.is_file() {
                manifests.push(manifest);
            }
        }
    }

    if manifests.is_empty() {
        // No manifests anywhere under the directory: surface the missing
        // unit as an import failure instead of an empty run
        return Ok(vec![own_manifest]);
    }

    manifests.sort();
    Ok(manifests)
}

/// Errors that can occur during manifest discovery
#[derive(Debug)]
pub enum DiscoveryError {
    /// Path is neither a file nor a directory
    InvalidPath(PathBuf),
    /// Failed to read directory
    ReadDir(PathBuf, std::io::Error),
    /// Failed to read directory entry
    ReadEntry(PathBuf, std::io::Error),
}

impl std::fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryError::InvalidPath(path) => {
                write!(f, "Invalid path: {}", path.display())
            }
            DiscoveryError::ReadDir(path, e) => {
                write!(f, "Failed to read directory {}: {}", path.display(), e)
            }
            DiscoveryError::ReadEntry(path, e) => {
                write!(f, "Failed to read entry in {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiscoveryError::InvalidPath(_) => None,
            DiscoveryError::ReadDir(_, e) => Some(e),
            DiscoveryError::ReadEntry(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("verifier_{}_{}", label, std::process::id()));
        let _ = fs::create_dir_all(&dir);
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_discover_single_file() {
        let dir = create_test_dir("disc_file");
        let manifest = dir.join(MANIFEST_FILE);
        fs::write(&manifest, "[package]\n").unwrap();

        let found = discover_manifests(&manifest).unwrap();
        assert_eq!(found, vec![manifest]);

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_discover_directory_own_manifest() {
        let dir = create_test_dir("disc_own");
        let manifest = dir.join(MANIFEST_FILE);
        fs::write(&manifest, "[package]\n").unwrap();

        let found = discover_manifests(&dir).unwrap();
        assert_eq!(found, vec![manifest]);

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_discover_subdirectory_manifests_sorted() {
        let dir = create_test_dir("disc_subdirs");
        for name in ["beta", "alpha"] {
            let sub = dir.join(name);
            fs::create_dir_all(&sub).unwrap();
            fs::write(sub.join(MANIFEST_FILE), "[package]\n").unwrap();
        }

        let found = discover_manifests(&dir).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], dir.join("alpha").join(MANIFEST_FILE));
        assert_eq!(found[1], dir.join("beta").join(MANIFEST_FILE));

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_discover_empty_directory_yields_missing_manifest() {
        let dir = create_test_dir("disc_empty");

        let found = discover_manifests(&dir).unwrap();
        assert_eq!(found, vec![dir.join(MANIFEST_FILE)]);
        assert!(!found[0].exists());

        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_discover_invalid_path() {
        let result = discover_manifests(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(DiscoveryError::InvalidPath(_))));
    }
}
