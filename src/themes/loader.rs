//! Theme loading: filesystem scan into the registry.
//!
//! `load_all` is the startup/reload path: scan the configured themes
//! directory and replace the registry contents. `load_one` is a pure read
//! used by preview and install-inspection flows; it deliberately does not
//! touch the registry.

use crate::error::{LanternError, Result};
use crate::package::{self, PackageDescriptor};
use crate::paths::{ContentKind, ContentPaths};
use crate::themes::list::ThemeList;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates the package reader against the configured themes directory
/// and populates the registry.
pub struct ThemeLoader<P: ContentPaths> {
    paths: P,
    list: Arc<ThemeList>,
}

impl<P: ContentPaths> ThemeLoader<P> {
    pub fn new(paths: P, list: Arc<ThemeList>) -> Self {
        Self { paths, list }
    }

    /// Scan the themes directory and replace the registry contents.
    ///
    /// Returns nothing; callers re-query the registry. A missing themes
    /// directory means "no themes" and resets the registry to empty; any
    /// other I/O failure propagates.
    pub fn load_all(&self) -> Result<()> {
        let themes_dir = self.paths.content_path(ContentKind::Themes);
        debug!("Loading themes from {}", themes_dir.display());

        match package::read_all(&themes_dir) {
            Ok(packages) => {
                self.list.init(packages);
                Ok(())
            }
            Err(LanternError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Themes directory does not exist, registry left empty");
                self.list.init_empty();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Read a single theme from disk without installing it in the registry.
    ///
    /// Fails with [`LanternError::PackageNotFound`] when no directory entry
    /// with that name exists; the error passes through unchanged so callers
    /// can pattern-match it.
    pub fn load_one(&self, name: &str) -> Result<PackageDescriptor> {
        let themes_dir = self.paths.content_path(ContentKind::Themes);
        let mut packages = package::read_one(&themes_dir, name)?;

        packages
            .remove(name)
            .ok_or_else(|| LanternError::PackageNotFound {
                name: name.to_string(),
            })
    }
}
