//! Close code table and the notice shown when the connection ends.

use serde::Serialize;

/// Human-readable reason for a WebSocket close code.
///
/// Only the codes an operator is likely to hit are named; everything else,
/// including a normal 1000 closure, reports `"Unknown Error"`.
pub fn close_reason(code: u16) -> &'static str {
    match code {
        1001 => "Endpoint going away.",
        1002 => "Protocol error.",
        1003 => "Unsupported message.",
        1005 => "No status.",
        1006 => "Abnormal disconnection.",
        1009 => "Data frame too large.",
        _ => "Unknown Error",
    }
}

/// The blocking notification raised when the connection closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseNotice {
    pub code: u16,
    pub reason: &'static str,
}

impl CloseNotice {
    pub fn new(code: u16) -> Self {
        Self {
            code,
            reason: close_reason(code),
        }
    }

    /// Text of the alert, e.g. `Connection closed, 1006 - Abnormal disconnection.`
    pub fn alert_text(&self) -> String {
        format!("Connection closed, {} - {}", self.code, self.reason)
    }
}
