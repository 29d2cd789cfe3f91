//! Lantern themes - theme package discovery, registry and request rendering.
//!
//! This crate is the theme layer of the Lantern publishing platform: it
//! discovers installed theme packages on disk, validates and parses their
//! metadata, keeps an in-memory registry of what is available, selects the
//! active theme and renders the password prompt for private sites.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`paths`] - Content path resolution (configuration service boundary)
//! - [`package`] - Package discovery and metadata parsing
//! - [`themes`] - Theme registry, loader, config and active-theme selection
//! - [`web`] - Request-time locals and private-site rendering
//!
//! # Example
//!
//! ```no_run
//! use lantern_themes::paths::SitePaths;
//! use lantern_themes::themes::{ThemeList, ThemeLoader};
//! use std::sync::Arc;
//!
//! let list = Arc::new(ThemeList::new());
//! let loader = ThemeLoader::new(SitePaths::new("/var/lib/lantern/content"), Arc::clone(&list));
//! loader.load_all()?;
//!
//! for (name, theme) in list.get_all() {
//!     println!("{} at {}", name, theme.path.display());
//! }
//! # Ok::<(), lantern_themes::LanternError>(())
//! ```

pub mod error;
pub mod package;
pub mod paths;
pub mod themes;
pub mod web;

pub use error::{LanternError, Result};
