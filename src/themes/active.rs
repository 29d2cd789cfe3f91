//! Active theme selection and the capability contract.
//!
//! The render pipeline never touches descriptors directly; it asks the
//! active theme two things: "do you have this template?" and "which engine
//! version were you built against?". [`ActiveTheme`] is that contract,
//! [`InstalledTheme`] implements it over a registry descriptor, and
//! [`ActiveThemeService`] selects the active theme by name.

use crate::error::{LanternError, Result};
use crate::package::PackageDescriptor;
use crate::themes::config::{self, ThemeConfig};
use crate::themes::list::ThemeList;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Engine version assumed when a theme declares none.
pub const DEFAULT_ENGINE_VERSION: &str = "v2";

/// Capability contract of the currently selected theme.
pub trait ActiveTheme {
    /// Whether the theme supplies a template with the given name.
    fn has_template(&self, name: &str) -> bool;

    /// The rendering-engine version the theme was built against, for the
    /// given engine kind (e.g. `"api"`).
    fn engine(&self, kind: &str) -> String;
}

/// A theme installed on disk, wrapping its registry descriptor.
#[derive(Debug, Clone)]
pub struct InstalledTheme {
    descriptor: PackageDescriptor,
    config: ThemeConfig,
}

impl InstalledTheme {
    pub fn new(descriptor: PackageDescriptor) -> Self {
        let config = config::create(descriptor.package_json.as_ref());
        Self { descriptor, config }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Effective configuration, allow-listed defaults merged with what the
    /// theme declared.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

impl ActiveTheme for InstalledTheme {
    fn has_template(&self, name: &str) -> bool {
        self.descriptor.path.join(format!("{name}.hbs")).is_file()
    }

    fn engine(&self, kind: &str) -> String {
        self.descriptor
            .package_json
            .as_ref()
            .and_then(|meta| meta.get("engines"))
            .and_then(Value::as_object)
            .and_then(|engines| engines.get(kind))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ENGINE_VERSION)
            .to_string()
    }
}

/// Supplies the currently active theme to request-time consumers.
///
/// The selection policy lives outside the render pipeline; tests substitute
/// a stub provider.
pub trait ActiveThemeProvider {
    fn get_active(&self) -> Option<Box<dyn ActiveTheme>>;
}

/// Active-theme selection backed by the registry.
pub struct ActiveThemeService {
    list: Arc<ThemeList>,
    active: RwLock<Option<String>>,
}

impl ActiveThemeService {
    pub fn new(list: Arc<ThemeList>) -> Self {
        Self {
            list,
            active: RwLock::new(None),
        }
    }

    /// Select the named theme as active.
    ///
    /// Fails with [`LanternError::PackageNotFound`] when the name is not in
    /// the registry.
    pub fn activate(&self, name: &str) -> Result<()> {
        if self.list.get(name).is_none() {
            return Err(LanternError::PackageNotFound {
                name: name.to_string(),
            });
        }

        info!("Activating theme: {}", name);
        *self.active.write().expect("active theme poisoned") = Some(name.to_string());
        Ok(())
    }

    /// Name of the currently active theme, if one has been selected.
    pub fn active_name(&self) -> Option<String> {
        self.active.read().expect("active theme poisoned").clone()
    }
}

impl ActiveThemeProvider for ActiveThemeService {
    fn get_active(&self) -> Option<Box<dyn ActiveTheme>> {
        let name = self.active_name()?;

        // The active theme may have been deleted by a reload; treat that the
        // same as no selection.
        let descriptor = self.list.get(&name)?;
        Some(Box::new(InstalledTheme::new(descriptor)))
    }
}
