//! Per-request locals middleware.
//!
//! Runs on every request before rendering and never short-circuits: it only
//! attaches version and URL metadata to the response locals.

use crate::themes::{ActiveTheme, ActiveThemeProvider, DEFAULT_ENGINE_VERSION};
use crate::web::{Request, Response};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Version of the platform serving the request.
pub const PLATFORM_VERSION: &str = env!("CARGO_PKG_VERSION");

static SAFE_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.)?(\d+)").expect("safe version regex"));

/// Sanitize a version string for public display: keep `major.minor`, drop
/// patch and prerelease noise.
pub fn safe_version(version: &str) -> String {
    SAFE_VERSION_RE
        .find(version)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| version.to_string())
}

/// Populate the response locals for this request.
///
/// Sets the platform version, its sanitized form, the API version the
/// active theme was built against, and the request's relative URL.
pub fn request_locals(req: &Request, res: &mut Response, themes: &dyn ActiveThemeProvider) {
    let api_version = themes
        .get_active()
        .map(|theme| theme.engine("api"))
        .unwrap_or_else(|| DEFAULT_ENGINE_VERSION.to_string());

    res.locals
        .insert("version".into(), json!(PLATFORM_VERSION));
    res.locals
        .insert("safe_version".into(), json!(safe_version(PLATFORM_VERSION)));
    res.locals.insert("api_version".into(), json!(api_version));
    res.locals.insert("relative_url".into(), json!(req.path));
}
