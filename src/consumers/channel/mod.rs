//! Channel consumer module.
//!
//! Forwards pipeline output into an mpsc sender, handing rendered values back
//! to host code (a UI thread, another task) without coupling to it.

/// Builder and configuration for the channel consumer.
pub mod channel_consumer;
/// Consumer trait implementation for the channel consumer.
pub mod consumer;
/// Input wiring for the channel consumer.
pub mod input;

pub use channel_consumer::ChannelConsumer;
