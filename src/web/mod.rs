//! Request-time rendering surface.
//!
//! This crate does not own the web framework; it consumes a reduced view of
//! the request/response pair and a [`Renderer`] supplied by the template
//! engine. [`locals`] injects per-request metadata before rendering and
//! [`private`] renders the password prompt for private-site mode.

pub mod locals;
pub mod mock;
pub mod private;

// Re-exports
pub use locals::{request_locals, safe_version, PLATFORM_VERSION};
pub use mock::MockRenderer;
pub use private::{render_password_prompt, PRIVATE_TEMPLATE};

use crate::error::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Request-scoped key/value data injected into the render context.
pub type Locals = BTreeMap<String, Value>;

/// The slice of an incoming request this crate consumes.
#[derive(Debug, Clone)]
pub struct Request {
    /// Relative URL path of the request.
    pub path: String,
}

/// The slice of the outgoing response this crate fills in.
#[derive(Debug, Default)]
pub struct Response {
    /// Locals attached so far, handed to the template on render.
    pub locals: Locals,

    /// Authentication error flagged by the password-gate middleware.
    pub error: Option<String>,
}

/// Identifier of the view to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A template name resolved against the active theme.
    Template(String),
    /// An absolute path to a view bundled with the platform.
    File(PathBuf),
}

/// Template engine boundary.
///
/// Render failures (template not found, engine errors) surface as
/// [`LanternError::TemplateRender`](crate::error::LanternError) and are not
/// caught in this crate; the framework's generic error handler deals with
/// them.
pub trait Renderer {
    fn render(&mut self, view: &View, context: &Locals) -> Result<()>;
}
