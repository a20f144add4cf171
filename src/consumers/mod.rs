//! Built-in consumer implementations.
//!
//! Consumers are the display sinks of a pipeline: the console, a channel back
//! to host code, or a vector for assertions.

/// Channel consumer forwarding items into an mpsc sender.
pub mod channel;
/// Display consumer printing each item.
pub mod display;
/// Vec consumer collecting items into a vector.
pub mod vec;
