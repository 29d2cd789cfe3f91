//! Error types for theme and package operations.
//!
//! This module defines [`LanternError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LanternError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LanternError::Other`) for unexpected errors
//! - Metadata parse failures are never surfaced as errors; they degrade to
//!   a descriptor without metadata (see `package::metadata`)

use thiserror::Error;

/// Core error type for theme and package operations.
#[derive(Debug, Error)]
pub enum LanternError {
    /// A named package lookup found no matching directory entry.
    ///
    /// The display text is fixed: installer and admin flows pattern-match
    /// on it to distinguish "not found" from other I/O failures.
    #[error("Package not found")]
    PackageNotFound { name: String },

    /// Template rendering failed inside a [`Renderer`](crate::web::Renderer)
    /// implementation. Passed through this crate untouched.
    #[error("Failed to render '{view}': {message}")]
    TemplateRender { view: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for theme and package operations.
pub type Result<T> = std::result::Result<T, LanternError>;
