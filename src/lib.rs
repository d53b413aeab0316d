//! wsdebug - a WebSocket debug console
//!
//! Opens one WebSocket connection, shows every inbound message newest-first
//! (JSON pretty-printed with long strings truncated), sends free-form or
//! template text, and reports the close code when the connection ends.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod close;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod message_log;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod web;
pub mod websocket;
pub mod widgets;
