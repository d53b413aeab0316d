//! Transport trait abstraction.
//!
//! The console never talks to a socket directly. It owns something that
//! implements [`Transport`] for the outbound direction and drains a channel of
//! [`TransportEvent`]s for the inbound direction, which lets tests swap in
//! [`crate::adapters::MockTransport`].

use async_trait::async_trait;
use thiserror::Error;

/// Close code reported when the server sent a close frame without a status.
pub const CLOSE_NO_STATUS: u16 = 1005;

/// Close code reported when the connection ended without any close frame.
pub const CLOSE_ABNORMAL: u16 = 1006;

/// Transport-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The socket could not be opened
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The connection task is gone
    #[error("Disconnected from server")]
    Disconnected,
    /// The frame could not be written
    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Everything the connection reports back to the console.
///
/// Events arrive in the order the browser `WebSocket` API would fire them:
/// `Opened` at most once, any number of `Message`s, and a final `Closed`.
/// An `Error` is always followed by `Closed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The handshake completed
    Opened,
    /// A text frame (binary frames are delivered as lossy UTF-8)
    Message(String),
    /// Something went wrong below the message layer
    Error(String),
    /// The connection is over
    Closed { code: u16 },
}

/// Outbound half of a console connection.
///
/// # Example
///
/// ```ignore
/// use wsdebug::traits::Transport;
///
/// async fn greet<T: Transport>(transport: &T) {
///     transport.send_text(r#"{"command":"list"}"#.to_string()).await?;
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one text frame, verbatim.
    async fn send_text(&self, text: String) -> Result<(), TransportError>;

    /// Close the connection. Safe to call more than once.
    fn shutdown(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(
            TransportError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(TransportError::Disconnected.to_string(), "Disconnected from server");
        assert_eq!(
            TransportError::SendFailed("broken pipe".to_string()).to_string(),
            "Send failed: broken pipe"
        );
    }

    #[test]
    fn test_transport_event_equality() {
        assert_eq!(TransportEvent::Opened, TransportEvent::Opened);
        assert_eq!(
            TransportEvent::Closed { code: CLOSE_ABNORMAL },
            TransportEvent::Closed { code: 1006 }
        );
        assert_ne!(
            TransportEvent::Message("a".to_string()),
            TransportEvent::Message("b".to_string())
        );
    }

    #[test]
    fn test_close_constants() {
        assert_eq!(CLOSE_NO_STATUS, 1005);
        assert_eq!(CLOSE_ABNORMAL, 1006);
    }
}
