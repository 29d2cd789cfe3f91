//! Content path resolution.
//!
//! The rest of the platform configures where user content lives; this crate
//! only needs to ask "where do themes live?". [`ContentPaths`] is that
//! boundary, and [`SitePaths`] is the concrete implementation used in
//! production, rooted at the site's content directory.

use std::path::{Path, PathBuf};

/// Kinds of content stored under the site's content directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Installed theme packages, one directory per theme.
    Themes,
}

impl ContentKind {
    /// Directory name under the content root for this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Themes => "themes",
        }
    }
}

/// Resolves absolute paths for content directories.
///
/// Implemented by the platform's configuration service; tests substitute a
/// fixture rooted in a temp directory.
pub trait ContentPaths {
    /// Absolute path of the directory holding the given content kind.
    fn content_path(&self, kind: ContentKind) -> PathBuf;
}

/// Production path resolver rooted at a single content directory.
#[derive(Debug, Clone)]
pub struct SitePaths {
    content_root: PathBuf,
}

impl SitePaths {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }
}

impl ContentPaths for SitePaths {
    fn content_path(&self, kind: ContentKind) -> PathBuf {
        self.content_root.join(kind.dir_name())
    }
}
