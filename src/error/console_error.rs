//! The crate-wide error type.

use thiserror::Error;

use crate::traits::TransportError;

/// Errors produced by the console library.
///
/// Transport failures are wrapped rather than flattened so callers can still
/// match on the underlying [`TransportError`].
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A template name that the active profile does not define
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A profile name that is neither built in nor in the profiles file
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// Submit was attempted after the connection closed
    #[error("Not connected")]
    NotConnected,

    /// The transport refused the outbound frame
    #[error("Send failed: {0}")]
    Send(#[from] TransportError),

    /// The endpoint is not a ws:// or wss:// URL
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    /// The profiles file was readable but not valid
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Short text suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::UnknownTemplate(name) => format!("No template named '{}'", name),
            ConsoleError::UnknownProfile(name) => {
                format!("No profile named '{}'. Try --list-profiles.", name)
            }
            ConsoleError::NotConnected => "The connection is closed. Restart to reconnect.".to_string(),
            ConsoleError::Send(err) => format!("Message not sent: {}", err),
            other => other.to_string(),
        }
    }
}
