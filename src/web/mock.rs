//! Mock renderer for testing.
//!
//! `MockRenderer` implements the [`Renderer`] trait and captures every
//! render call for later assertion. It can be configured to fail, for
//! exercising error propagation.
//!
//! # Example
//!
//! ```
//! use lantern_themes::web::{Locals, MockRenderer, Renderer, View};
//!
//! let mut renderer = MockRenderer::new();
//! renderer.render(&View::Template("private".into()), &Locals::new()).unwrap();
//!
//! let (view, _context) = renderer.last_call().unwrap();
//! assert_eq!(view, &View::Template("private".into()));
//! ```

use crate::error::{LanternError, Result};
use crate::web::{Locals, Renderer, View};

/// Renderer implementation that records calls instead of rendering.
#[derive(Debug, Default)]
pub struct MockRenderer {
    calls: Vec<(View, Locals)>,
    fail_message: Option<String>,
}

impl MockRenderer {
    /// Create a renderer that succeeds and records every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer whose every render fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_message: Some(message.to_string()),
        }
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> &[(View, Locals)] {
        &self.calls
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<(&View, &Locals)> {
        self.calls.last().map(|(view, context)| (view, context))
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self, view: &View, context: &Locals) -> Result<()> {
        if let Some(message) = &self.fail_message {
            return Err(LanternError::TemplateRender {
                view: match view {
                    View::Template(name) => name.clone(),
                    View::File(path) => path.display().to_string(),
                },
                message: message.clone(),
            });
        }

        self.calls.push((view.clone(), context.clone()));
        Ok(())
    }
}
