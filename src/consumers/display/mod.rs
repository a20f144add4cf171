//! Display consumer module.
//!
//! Prints each item to stdout; the text sink of a signal pipeline.

/// Consumer trait implementation for the display consumer.
pub mod consumer;
/// Builder and configuration for the display consumer.
pub mod display_consumer;
/// Input wiring for the display consumer.
pub mod input;

pub use display_consumer::DisplayConsumer;
