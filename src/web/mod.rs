//! Browser rendition of the console.
//!
//! `wsdebug --web` serves a page that does in the browser what the terminal
//! UI does in the terminal, against the same profile.

pub mod html;
pub mod server;

pub use html::CONSOLE_HTML;
pub use server::{router, start_web_console, start_web_console_on, WebConsoleState};
