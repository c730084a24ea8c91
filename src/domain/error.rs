//! Error types for the zroster plugin.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] used throughout the plugin. Failures never terminate the plugin: every
//! variant degrades to a visible message or a logged no-op.

use crate::domain::draft::FieldErrors;
use crate::domain::user::UserId;
use thiserror::Error;

/// The main error type for zroster operations.
///
/// # Examples
///
/// ```
/// use zroster::RosterError;
///
/// let err = RosterError::Transport {
///     status: 503,
///     message: "Failed to fetch users (503)".to_string(),
/// };
/// assert_eq!(err.to_string(), "Failed to fetch users (503)");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A request to the user collection did not complete with a 2xx status.
    ///
    /// Covers non-success HTTP responses and network failures alike. The message
    /// is already phrased for the page-level error banner.
    #[error("{message}")]
    Transport {
        /// HTTP status reported by the host (0 when no response was received).
        status: u16,
        /// Banner text naming the failed operation.
        message: String,
    },

    /// A form draft failed client-side validation.
    ///
    /// Rendered inline next to the offending fields; never reaches the network.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// An edit or delete targeted a user that is no longer in the local store.
    ///
    /// Treated as a no-op by the screen controller.
    #[error("User {0} is no longer in the local store")]
    NotFoundLocally(UserId),

    /// A payload could not be encoded or a reply context could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for zroster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::{validate, FormDraft};

    #[test]
    fn transport_error_displays_banner_text() {
        let err = RosterError::Transport {
            status: 404,
            message: "Failed to delete (404)".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to delete (404)");
    }

    #[test]
    fn validation_error_lists_fields() {
        let errors = validate(&FormDraft::default());
        let text = RosterError::Validation(errors).to_string();
        assert!(text.starts_with("Validation failed: "));
        assert!(text.contains("First name must be at least 2 characters"));
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(RosterError::from(err), RosterError::Decode(_)));
    }
}
