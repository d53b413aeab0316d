//! Mock transport for testing.
//!
//! Provides a transport that records every outbound frame and lets tests
//! inject the inbound event sequence by hand.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::traits::{Transport, TransportError, TransportEvent};

/// Mock transport for testing.
///
/// # Example
///
/// ```ignore
/// use wsdebug::adapters::MockTransport;
/// use wsdebug::traits::Transport;
///
/// let (mock, mut events) = MockTransport::new();
/// mock.emit_open();
/// mock.send_text("ping".to_string()).await?;
/// assert_eq!(mock.get_sent_messages().await, vec!["ping".to_string()]);
/// ```
pub struct MockTransport {
    /// Sender side of the event channel handed to the session
    events_tx: mpsc::UnboundedSender<TransportEvent>,
    /// Captured outbound frames
    sent_messages: Arc<Mutex<Vec<String>>>,
    /// Whether send should fail
    send_should_fail: Arc<Mutex<bool>>,
    /// Set once shutdown() is called
    shut_down: Arc<AtomicBool>,
}

impl MockTransport {
    /// Create a mock and the event receiver the session should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mock = Self {
            events_tx,
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            send_should_fail: Arc::new(Mutex::new(false)),
            shut_down: Arc::new(AtomicBool::new(false)),
        };
        (mock, events_rx)
    }

    /// Inject an arbitrary event.
    pub fn emit(&self, event: TransportEvent) {
        // Ignore send errors (receiver dropped)
        let _ = self.events_tx.send(event);
    }

    pub fn emit_open(&self) {
        self.emit(TransportEvent::Opened);
    }

    pub fn emit_message(&self, text: impl Into<String>) {
        self.emit(TransportEvent::Message(text.into()));
    }

    pub fn emit_error(&self, detail: impl Into<String>) {
        self.emit(TransportEvent::Error(detail.into()));
    }

    pub fn emit_close(&self, code: u16) {
        self.emit(TransportEvent::Closed { code });
    }

    /// Get all sent frames, oldest first.
    pub async fn get_sent_messages(&self) -> Vec<String> {
        self.sent_messages.lock().await.clone()
    }

    /// Clear all sent frames.
    pub async fn clear_sent_messages(&self) {
        self.sent_messages.lock().await.clear();
    }

    /// Configure whether send should fail.
    pub async fn set_send_should_fail(&self, should_fail: bool) {
        *self.send_should_fail.lock().await = should_fail;
    }

    /// Whether shutdown() has been called on this mock or any clone.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Clone for MockTransport {
    fn clone(&self) -> Self {
        Self {
            events_tx: self.events_tx.clone(),
            sent_messages: self.sent_messages.clone(),
            send_should_fail: self.send_should_fail.clone(),
            shut_down: self.shut_down.clone(),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_text(&self, text: String) -> Result<(), TransportError> {
        if *self.send_should_fail.lock().await {
            return Err(TransportError::SendFailed("Mock send failure".to_string()));
        }

        self.sent_messages.lock().await.push(text);
        Ok(())
    }

    fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_events_in_order() {
        let (mock, mut rx) = MockTransport::new();

        mock.emit_open();
        mock.emit_message("hello");
        mock.emit_error("reset");
        mock.emit_close(1006);

        assert_eq!(rx.recv().await, Some(TransportEvent::Opened));
        assert_eq!(
            rx.recv().await,
            Some(TransportEvent::Message("hello".to_string()))
        );
        assert_eq!(rx.recv().await, Some(TransportEvent::Error("reset".to_string())));
        assert_eq!(rx.recv().await, Some(TransportEvent::Closed { code: 1006 }));
    }

    #[tokio::test]
    async fn test_send_is_recorded() {
        let (mock, _rx) = MockTransport::new();

        mock.send_text("one".to_string()).await.unwrap();
        mock.send_text("two".to_string()).await.unwrap();

        assert_eq!(
            mock.get_sent_messages().await,
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[tokio::test]
    async fn test_send_failure() {
        let (mock, _rx) = MockTransport::new();
        mock.set_send_should_fail(true).await;

        let result = mock.send_text("x".to_string()).await;
        assert!(matches!(result, Err(TransportError::SendFailed(_))));
        assert!(mock.get_sent_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_sent_messages() {
        let (mock, _rx) = MockTransport::new();
        mock.send_text("x".to_string()).await.unwrap();

        mock.clear_sent_messages().await;
        assert!(mock.get_sent_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let (mock, _rx) = MockTransport::new();
        let cloned = mock.clone();

        cloned.send_text("from clone".to_string()).await.unwrap();
        assert_eq!(mock.get_sent_messages().await.len(), 1);

        cloned.shutdown();
        assert!(mock.is_shut_down());
    }

    #[test]
    fn test_emit_after_receiver_dropped() {
        let (mock, rx) = MockTransport::new();
        drop(rx);
        // Must not panic
        mock.emit_open();
    }
}
