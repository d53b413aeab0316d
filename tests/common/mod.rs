//! Common test utilities for integration tests.
//!
//! Provides a loopback WebSocket server with scripted behaviour so the
//! real transport can be exercised without a remote endpoint.
//!
//! Text frames are echoed back, except for a few commands:
//! - `close:<code>` - the server sends a close frame with that code
//! - `close` - the server sends a close frame without a status
//! - `drop` - the server drops the TCP connection without closing
//! - `binary` - the server replies with a binary frame

#![allow(dead_code)]

use std::borrow::Cow;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use wsdebug::traits::TransportEvent;

/// How long tests wait for any single transport event.
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Start the scripted server on a random port.
///
/// Returns the server task and a `ws://` URL pointing at it.
pub async fn start_scripted_server() -> (JoinHandle<()>, String) {
    start_scripted_server_with_greeting(None).await
}

/// Like [`start_scripted_server`], but every connection first receives
/// `greeting` as a text frame.
pub async fn start_scripted_server_with_greeting(
    greeting: Option<&'static str>,
) -> (JoinHandle<()>, String) {
    let app = Router::new().route(
        "/",
        get(move |ws: WebSocketUpgrade| async move {
            ws.on_upgrade(move |socket| handle_socket(socket, greeting))
                .into_response()
        }),
    );

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (handle, format!("ws://{}/", addr))
}

async fn handle_socket(mut socket: WebSocket, greeting: Option<&'static str>) {
    if let Some(greeting) = greeting {
        if socket.send(Message::Text(greeting.to_string())).await.is_err() {
            return;
        }
    }

    while let Some(Ok(msg)) = socket.recv().await {
        let Message::Text(text) = msg else {
            continue;
        };

        if text == "drop" {
            return;
        }

        if text == "close" {
            let _ = socket.send(Message::Close(None)).await;
            continue;
        }

        if let Some(code) = text.strip_prefix("close:") {
            let code: u16 = code.parse().expect("close code");
            let _ = socket
                .send(Message::Close(Some(CloseFrame {
                    code,
                    reason: Cow::Borrowed("scripted"),
                })))
                .await;
            continue;
        }

        if text == "binary" {
            let _ = socket.send(Message::Binary(b"bin\xff".to_vec())).await;
            continue;
        }

        if socket.send(Message::Text(text)).await.is_err() {
            return;
        }
    }
}

/// Receive the next event or fail the test after [`EVENT_TIMEOUT`].
pub async fn next_event(events: &mut mpsc::UnboundedReceiver<TransportEvent>) -> TransportEvent {
    timeout(EVENT_TIMEOUT, events.recv())
        .await
        .expect("Timed out waiting for transport event")
        .expect("Event channel closed")
}
