//! WebSocket client for the console connection.
//!
//! One connection per client, driven by a background task that translates
//! tungstenite frames into [`crate::traits::TransportEvent`]s.

pub mod client;

pub use client::WsClient;
