//! Concrete implementations of [`crate::traits::Transport`].
//!
//! - [`TungsteniteTransport`] - WebSocket using tokio-tungstenite
//! - [`mock::MockTransport`] - event injection and send capture for tests

pub mod mock;
pub mod tungstenite_ws;

pub use mock::MockTransport;
pub use tungstenite_ws::TungsteniteTransport;
