//! In-memory registry of installed themes.
//!
//! The one piece of shared mutable state in this crate. Constructed once at
//! startup and handed around as `Arc<ThemeList>`; the loader is the only
//! writer, everything else reads. A reload replaces the contents wholesale
//! (`init`), and request-time readers may observe a transiently partial
//! registry while that happens — reloads are rare administrative events and
//! callers serialize them.

use crate::package::{PackageCollection, PackageDescriptor};
use std::sync::RwLock;
use tracing::info;

/// Registry of installed themes, keyed by theme name.
#[derive(Debug, Default)]
pub struct ThemeList {
    themes: RwLock<PackageCollection>,
}

impl ThemeList {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire registry with `collection`.
    ///
    /// Each entry goes through [`set`](Self::set) so its guard applies
    /// uniformly; entries are installed in the collection's iteration order.
    pub fn init(&self, collection: PackageCollection) {
        info!("Reloading theme registry ({} themes)", collection.len());
        self.themes.write().expect("theme list poisoned").clear();
        for (name, descriptor) in collection {
            self.set(&name, descriptor);
        }
    }

    /// Reset the registry to empty.
    pub fn init_empty(&self) {
        self.init(PackageCollection::new());
    }

    /// Insert or overwrite the entry for `name`.
    ///
    /// An empty name is ignored silently: a caller that lost track of its
    /// key must not be able to corrupt the registry.
    pub fn set(&self, name: &str, descriptor: PackageDescriptor) {
        if name.is_empty() {
            return;
        }
        self.themes
            .write()
            .expect("theme list poisoned")
            .insert(name.to_string(), descriptor);
    }

    /// Look up a single theme. An empty name always yields `None`, never
    /// the whole collection.
    pub fn get(&self, name: &str) -> Option<PackageDescriptor> {
        if name.is_empty() {
            return None;
        }
        self.themes
            .read()
            .expect("theme list poisoned")
            .get(name)
            .cloned()
    }

    /// A copy of the entire registry.
    pub fn get_all(&self) -> PackageCollection {
        self.themes.read().expect("theme list poisoned").clone()
    }

    /// Remove the entry for `name`; no-op on an empty name, matching
    /// [`set`](Self::set)'s guard.
    pub fn del(&self, name: &str) {
        if name.is_empty() {
            return;
        }
        self.themes
            .write()
            .expect("theme list poisoned")
            .remove(name);
    }
}
