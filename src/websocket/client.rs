use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{protocol::CloseFrame, Message},
};
use tracing::{debug, error, info, warn};

use crate::traits::{TransportError, TransportEvent, CLOSE_ABNORMAL, CLOSE_NO_STATUS};

/// Commands from the console to the connection task.
enum Outbound {
    Text {
        text: String,
        ack: oneshot::Sender<Result<(), TransportError>>,
    },
    Close,
}

/// What the connection loop does with one inbound frame.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FrameAction {
    /// Hand the event to the console and keep reading
    Deliver(TransportEvent),
    /// Hand the event to the console and stop
    Finish(TransportEvent),
    /// Control traffic handled by tungstenite itself
    Ignore,
}

/// Map a close frame to the code the console reports.
pub(crate) fn close_code(frame: Option<&CloseFrame<'_>>) -> u16 {
    frame.map_or(CLOSE_NO_STATUS, |f| u16::from(f.code))
}

/// Decide what a received frame means to the console.
pub(crate) fn classify_frame(msg: Message) -> FrameAction {
    match msg {
        Message::Text(text) => FrameAction::Deliver(TransportEvent::Message(text)),
        Message::Binary(data) => FrameAction::Deliver(TransportEvent::Message(
            String::from_utf8_lossy(&data).into_owned(),
        )),
        Message::Close(frame) => FrameAction::Finish(TransportEvent::Closed {
            code: close_code(frame.as_ref()),
        }),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => FrameAction::Ignore,
    }
}

/// A single WebSocket connection running in a background task.
///
/// There is no reconnection: once the task reports `Closed`, this client is
/// spent and every send fails with [`TransportError::Disconnected`].
pub struct WsClient {
    outbound_tx: mpsc::UnboundedSender<Outbound>,
    shutdown: Arc<AtomicBool>,
}

impl WsClient {
    /// Start connecting to `url` in the background.
    ///
    /// Returns immediately; the outcome of the handshake arrives on the event
    /// receiver as `Opened`, or as `Error` followed by `Closed { code: 1006 }`.
    /// Must be called from inside a tokio runtime.
    pub fn connect(url: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let url = url.into();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            run_connection(url, outbound_rx, events_tx).await;
        });

        let client = Self {
            outbound_tx,
            shutdown: Arc::new(AtomicBool::new(false)),
        };
        (client, events_rx)
    }

    /// Send a text frame and wait until it has been written.
    pub async fn send_text(&self, text: String) -> Result<(), TransportError> {
        let (ack, ack_rx) = oneshot::channel();
        self.outbound_tx
            .send(Outbound::Text { text, ack })
            .map_err(|_| TransportError::Disconnected)?;
        ack_rx.await.map_err(|_| TransportError::Disconnected)?
    }

    /// Ask the connection task to send a close frame and stop.
    pub fn shutdown(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            info!("Shutting down WebSocket client");
            let _ = self.outbound_tx.send(Outbound::Close);
        }
    }
}

impl Drop for WsClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_connection(
    url: String,
    mut outbound_rx: mpsc::UnboundedReceiver<Outbound>,
    events_tx: mpsc::UnboundedSender<TransportEvent>,
) {
    let ws_stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            error!("Failed to connect to {}: {}", url, e);
            let _ = events_tx.send(TransportEvent::Error(
                TransportError::ConnectionFailed(e.to_string()).to_string(),
            ));
            let _ = events_tx.send(TransportEvent::Closed {
                code: CLOSE_ABNORMAL,
            });
            return;
        }
    };

    info!("Connected to WebSocket server at {}", url);
    let _ = events_tx.send(TransportEvent::Opened);

    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    loop {
        tokio::select! {
            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(frame)) => match classify_frame(frame) {
                        FrameAction::Deliver(event) => {
                            debug!("Received frame: {:?}", event);
                            if events_tx.send(event).is_err() {
                                warn!("Event channel closed, shutting down");
                                let _ = ws_sink.close().await;
                                break;
                            }
                        }
                        FrameAction::Finish(event) => {
                            info!("Received close frame from server: {:?}", event);
                            let _ = events_tx.send(event);
                            // Completes the closing handshake
                            let _ = ws_sink.close().await;
                            break;
                        }
                        FrameAction::Ignore => {
                            // Flush any queued pong
                            let _ = ws_sink.flush().await;
                        }
                    },
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        let _ = events_tx.send(TransportEvent::Error(e.to_string()));
                        let _ = events_tx.send(TransportEvent::Closed { code: CLOSE_ABNORMAL });
                        break;
                    }
                    None => {
                        info!("WebSocket stream ended without a close frame");
                        let _ = events_tx.send(TransportEvent::Closed { code: CLOSE_ABNORMAL });
                        break;
                    }
                }
            }
            command = outbound_rx.recv() => {
                match command {
                    Some(Outbound::Text { text, ack }) => {
                        debug!("Sending frame: {}", text);
                        let result = ws_sink
                            .send(Message::Text(text))
                            .await
                            .map_err(|e| TransportError::SendFailed(e.to_string()));
                        if let Err(e) = &result {
                            error!("Failed to send frame: {}", e);
                        }
                        let _ = ack.send(result);
                    }
                    Some(Outbound::Close) | None => {
                        debug!("Close requested, closing connection");
                        let _ = ws_sink.close().await;
                        break;
                    }
                }
            }
        }
    }

    info!("Connection loop ended");
}
