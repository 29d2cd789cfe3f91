//! Package descriptor types produced by a directory scan.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One discovered package on disk.
///
/// Built fresh on every scan and never patched in place; the next scan
/// replaces descriptors wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDescriptor {
    /// Package name, derived from the directory's base name.
    pub name: String,

    /// Absolute path to the package directory.
    pub path: PathBuf,

    /// Parsed metadata file contents, or `None` when the metadata file is
    /// missing, unreadable, unparsable, or fails minimal validation.
    /// Never partially populated.
    pub package_json: Option<Map<String, Value>>,
}

/// Result of a single scan: package name to descriptor.
///
/// A `BTreeMap` keeps iteration order deterministic, which matters when the
/// registry installs entries one at a time during a bulk load.
pub type PackageCollection = BTreeMap<String, PackageDescriptor>;
