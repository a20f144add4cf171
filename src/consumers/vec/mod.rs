//! Vec consumer module.
//!
//! Collects items into a vector, mostly for tests and demos.

/// Consumer trait implementation for the vec consumer.
pub mod consumer;
/// Input wiring for the vec consumer.
pub mod input;
/// Builder and configuration for the vec consumer.
pub mod vec_consumer;

pub use vec_consumer::VecConsumer;
