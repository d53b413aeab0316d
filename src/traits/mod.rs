//! Trait abstractions for dependency injection and testability.
//!
//! - [`Transport`] - outbound half of the console connection

pub mod transport;

pub use transport::{
    Transport, TransportError, TransportEvent, CLOSE_ABNORMAL, CLOSE_NO_STATUS,
};
