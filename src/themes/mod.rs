//! Theme services: registry, loading, configuration and selection.
//!
//! Themes are packages consumed by the rendering layer. The loader scans the
//! configured themes directory into the registry at startup or on an
//! administrative reload; the active-theme service selects one registered
//! theme to serve requests.

pub mod active;
pub mod config;
pub mod list;
pub mod loader;

// Re-exports
pub use active::{
    ActiveTheme, ActiveThemeProvider, ActiveThemeService, InstalledTheme, DEFAULT_ENGINE_VERSION,
};
pub use config::ThemeConfig;
pub use list::ThemeList;
pub use loader::ThemeLoader;
