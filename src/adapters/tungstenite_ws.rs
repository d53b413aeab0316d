//! Tungstenite-based transport adapter.
//!
//! Wraps [`WsClient`] and implements the [`Transport`] trait.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::traits::{Transport, TransportError, TransportEvent};
use crate::websocket::WsClient;

/// Transport adapter using tokio-tungstenite.
///
/// # Example
///
/// ```ignore
/// use wsdebug::adapters::TungsteniteTransport;
///
/// let (transport, mut events) = TungsteniteTransport::connect("ws://127.0.0.1:9039");
/// while let Some(event) = events.recv().await {
///     println!("{:?}", event);
/// }
/// ```
pub struct TungsteniteTransport {
    client: WsClient,
}

impl TungsteniteTransport {
    /// Start connecting to `url`. See [`WsClient::connect`].
    pub fn connect(url: &str) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let (client, events) = WsClient::connect(url);
        (Self { client }, events)
    }
}

#[async_trait]
impl Transport for TungsteniteTransport {
    async fn send_text(&self, text: String) -> Result<(), TransportError> {
        self.client.send_text(text).await
    }

    fn shutdown(&self) {
        self.client.shutdown();
    }
}
