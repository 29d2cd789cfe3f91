//! Password prompt rendering for private-site mode.
//!
//! A private site gates every page behind a password prompt. Themes may ship
//! their own prompt template; when they don't, the platform's bundled view
//! is used instead.

use crate::error::Result;
use crate::themes::{ActiveTheme, ActiveThemeProvider};
use crate::web::{Locals, Renderer, Response, View};
use serde_json::json;
use std::path::Path;

/// Template name a theme supplies to customize the password prompt.
pub const PRIVATE_TEMPLATE: &str = "private";

/// File name of the bundled fallback view.
const DEFAULT_VIEW: &str = "private.hbs";

/// Render the password prompt for the current request.
///
/// Uses the active theme's `private` template when it has one, otherwise the
/// bundled view under `views_dir`. When the password gate flagged an error
/// on the response, the render context is exactly `{error}`; otherwise it is
/// whatever locals are already attached, untouched. Render failures
/// propagate to the framework's error handler.
pub fn render_password_prompt(
    res: &Response,
    themes: &dyn ActiveThemeProvider,
    views_dir: &Path,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    let theme_has_template = themes
        .get_active()
        .is_some_and(|theme| theme.has_template(PRIVATE_TEMPLATE));

    let view = if theme_has_template {
        View::Template(PRIVATE_TEMPLATE.to_string())
    } else {
        View::File(views_dir.join(DEFAULT_VIEW))
    };

    let context = match &res.error {
        Some(error) => Locals::from([("error".to_string(), json!(error))]),
        None => res.locals.clone(),
    };

    renderer.render(&view, &context)
}
