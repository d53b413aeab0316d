//! Error handling for the console.
//!
//! Library code returns [`ConsoleResult`]; the binary converts to
//! `color_eyre::Result` at the edge.

mod console_error;

pub use console_error::ConsoleError;

/// Type alias for Results using [`ConsoleError`].
pub type ConsoleResult<T> = Result<T, ConsoleError>;
