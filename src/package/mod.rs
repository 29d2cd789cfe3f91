//! Package discovery on disk.
//!
//! A "package" is a directory plus an optional `package.json` metadata file;
//! themes are the packages this platform consumes. This module scans a
//! packages directory, filters out entries that cannot be packages, and
//! builds normalized descriptors. Metadata problems fail soft — a broken
//! `package.json` costs that package its metadata, never the whole scan.

pub mod descriptor;
pub mod metadata;
pub mod read;

// Re-exports
pub use descriptor::{PackageCollection, PackageDescriptor};
pub use metadata::METADATA_FILE;
pub use read::{read_all, read_one};
