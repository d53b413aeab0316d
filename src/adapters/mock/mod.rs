//! Mock implementations for testing.
//!
//! Lets the console session be driven without a network.

pub mod transport;

pub use transport::MockTransport;
