//! Metadata file reading and minimal validation.
//!
//! Every package directory may carry a `package.json` at its root. Reading
//! it can fail in many ways (missing file, bad UTF-8, invalid JSON, missing
//! required fields) and none of them should abort a scan: all failure modes
//! collapse to [`Metadata::Absent`], which becomes `package_json: None` on
//! the descriptor. Only the reader sees the distinction.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name of the metadata file inside a package directory.
pub const METADATA_FILE: &str = "package.json";

/// Outcome of a metadata read, before collapsing to the nullable field on
/// [`PackageDescriptor`](crate::package::PackageDescriptor).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Metadata {
    /// A valid metadata object was parsed.
    Parsed(Map<String, Value>),
    /// Missing, unreadable, unparsable, or invalid. Treated as "no metadata".
    Absent,
}

impl Metadata {
    /// Collapse to the descriptor's nullable field.
    pub(crate) fn into_option(self) -> Option<Map<String, Value>> {
        match self {
            Metadata::Parsed(map) => Some(map),
            Metadata::Absent => None,
        }
    }
}

/// Read and validate the metadata file inside `package_dir`.
///
/// Fails soft: any problem yields [`Metadata::Absent`] rather than an error.
pub(crate) fn read_metadata(package_dir: &Path) -> Metadata {
    let path = package_dir.join(METADATA_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Metadata::Absent,
    };

    let parsed: Value = match serde_json::from_str(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Invalid JSON in {}: {}", path.display(), e);
            return Metadata::Absent;
        }
    };

    let Value::Object(map) = parsed else {
        warn!("Metadata in {} is not an object", path.display());
        return Metadata::Absent;
    };

    if !is_valid(&map) {
        warn!(
            "Metadata in {} is missing required fields (name, version)",
            path.display()
        );
        return Metadata::Absent;
    }

    Metadata::Parsed(map)
}

/// Minimal validation: a non-empty string `name` plus a `version` field.
fn is_valid(map: &Map<String, Value>) -> bool {
    let has_name = map
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());

    has_name && map.contains_key("version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn invalid_json_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), "{not json").unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn non_object_json_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), "[1, 2, 3]").unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn missing_version_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), r#"{"name": "test"}"#).unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn missing_name_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), r#"{"version": "0.0.0"}"#).unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn empty_name_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(METADATA_FILE),
            r#"{"name": "", "version": "0.0.0"}"#,
        )
        .unwrap();
        assert_eq!(read_metadata(temp.path()), Metadata::Absent);
    }

    #[test]
    fn valid_metadata_is_parsed() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(METADATA_FILE),
            r#"{"name": "test", "version": "0.0.0"}"#,
        )
        .unwrap();

        match read_metadata(temp.path()) {
            Metadata::Parsed(map) => {
                assert_eq!(map["name"], "test");
                assert_eq!(map["version"], "0.0.0");
            }
            Metadata::Absent => panic!("expected parsed metadata"),
        }
    }

    #[test]
    fn into_option_collapses_variants() {
        assert!(Metadata::Absent.into_option().is_none());
        assert!(Metadata::Parsed(Map::new()).into_option().is_some());
    }
}
