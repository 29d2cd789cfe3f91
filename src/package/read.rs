//! Directory scanning for installed packages.
//!
//! A packages directory contains one subdirectory per package, plus whatever
//! junk accumulates around it: version-control directories, dependency
//! caches, OS metadata files, uploaded archives. The scanner keeps only real
//! package directories and reads each one's metadata file, failing soft on
//! anything short of an actual I/O error.

use crate::error::{LanternError, Result};
use crate::package::descriptor::{PackageCollection, PackageDescriptor};
use crate::package::metadata::read_metadata;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Directory names that are never packages, even though they are directories.
const IGNORED_DIRS: &[&str] = &["node_modules", "bower_components"];

/// Whether a directory entry name is a package candidate.
///
/// Hidden entries (`.git`, `.DS_Store`) and dependency caches are rejected
/// by name; non-directories are rejected by the caller.
fn is_candidate(name: &str) -> bool {
    !name.starts_with('.') && !IGNORED_DIRS.contains(&name)
}

/// Build the descriptor for one package directory.
fn read_package(dir: &Path, name: &str) -> PackageDescriptor {
    let path = dir.join(name);
    let package_json = read_metadata(&path).into_option();

    PackageDescriptor {
        name: name.to_string(),
        path,
        package_json,
    }
}

/// Scan `dir` and return every package found in it.
///
/// Junk entries are skipped silently; a malformed metadata file degrades to
/// `package_json: None` for that one package. Only unexpected I/O failures
/// (the directory itself unreadable, a listing error) propagate.
pub fn read_all(dir: &Path) -> Result<PackageCollection> {
    let mut packages = PackageCollection::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if !entry.path().is_dir() || !is_candidate(&name) {
            debug!("Skipping non-package entry: {}", name);
            continue;
        }

        let descriptor = read_package(dir, &name);
        packages.insert(descriptor.name.clone(), descriptor);
    }

    Ok(packages)
}

/// Scan for a single named package in `dir`.
///
/// Returns a collection with the same shape as [`read_all`], restricted to
/// the one entry. A name with no directory entry at all fails with
/// [`LanternError::PackageNotFound`]; a name that exists but is a plain file
/// yields an empty collection, so callers can probe without special-casing
/// files against directories.
pub fn read_one(dir: &Path, name: &str) -> Result<PackageCollection> {
    let path = dir.join(name);

    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LanternError::PackageNotFound {
                name: name.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut packages = PackageCollection::new();

    if metadata.is_dir() {
        let descriptor = read_package(dir, name);
        packages.insert(descriptor.name.clone(), descriptor);
    } else {
        debug!("Requested package entry is not a directory: {}", name);
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_theme(dir: &Path, name: &str) {
        fs::create_dir(dir.join(name)).unwrap();
        fs::write(dir.join(name).join("index.hbs"), "").unwrap();
    }

    #[test]
    fn read_all_ignores_junk_entries() {
        let temp = TempDir::new().unwrap();
        make_theme(temp.path(), "aquarius");

        fs::create_dir(temp.path().join("node_modules")).unwrap();
        fs::create_dir(temp.path().join("bower_components")).unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".DS_Store"), "").unwrap();
        fs::write(temp.path().join("aquarius.zip"), "").unwrap();
        fs::write(temp.path().join("Thumbs.db"), "").unwrap();

        let packages = read_all(temp.path()).unwrap();

        assert_eq!(packages.len(), 1);
        let pkg = &packages["aquarius"];
        assert_eq!(pkg.name, "aquarius");
        assert_eq!(pkg.path, temp.path().join("aquarius"));
        assert!(pkg.package_json.is_none());
    }

    #[test]
    fn read_all_parses_metadata_files() {
        let temp = TempDir::new().unwrap();
        make_theme(temp.path(), "testtheme");
        fs::write(
            temp.path().join("testtheme").join("package.json"),
            r#"{"name": "test", "version": "0.0.0"}"#,
        )
        .unwrap();

        let packages = read_all(temp.path()).unwrap();

        let meta = packages["testtheme"].package_json.as_ref().unwrap();
        assert_eq!(meta["name"], "test");
        assert_eq!(meta["version"], "0.0.0");
    }

    #[test]
    fn read_all_degrades_invalid_metadata_to_none() {
        let temp = TempDir::new().unwrap();
        make_theme(temp.path(), "testtheme");
        // missing version
        fs::write(
            temp.path().join("testtheme").join("package.json"),
            r#"{"name": "test"}"#,
        )
        .unwrap();

        let packages = read_all(temp.path()).unwrap();
        assert!(packages["testtheme"].package_json.is_none());
    }

    #[test]
    fn read_all_fails_on_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = read_all(&temp.path().join("nope"));
        assert!(matches!(result, Err(LanternError::Io(_))));
    }

    #[test]
    fn read_one_returns_single_requested_package() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("aquarius.zip"), "").unwrap();
        fs::write(temp.path().join(".DS_Store"), "").unwrap();
        make_theme(temp.path(), "aquarius");
        make_theme(temp.path(), "not-aquarius");

        let packages = read_one(temp.path(), "aquarius").unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages["aquarius"].path, temp.path().join("aquarius"));
        assert!(packages["aquarius"].package_json.is_none());
    }

    #[test]
    fn read_one_fails_when_package_missing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("aquarius.zip"), "").unwrap();

        let err = read_one(temp.path(), "aquarius").unwrap_err();
        assert_eq!(err.to_string(), "Package not found");
        assert!(matches!(err, LanternError::PackageNotFound { .. }));
    }

    #[test]
    fn read_one_yields_empty_collection_for_plain_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("aquarius.zip"), "").unwrap();

        let packages = read_one(temp.path(), "aquarius.zip").unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn read_one_parses_metadata() {
        let temp = TempDir::new().unwrap();
        make_theme(temp.path(), "testtheme");
        fs::write(
            temp.path().join("testtheme").join("package.json"),
            r#"{"name": "test", "version": "0.0.0"}"#,
        )
        .unwrap();

        let packages = read_one(temp.path(), "testtheme").unwrap();
        assert!(packages["testtheme"].package_json.is_some());
    }
}
