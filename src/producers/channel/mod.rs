//! Channel producer module.
//!
//! The injection seam between host platform sensor callbacks and a pipeline:
//! the callback sends into the channel, the producer streams the receiver end.

/// The channel producer implementation.
pub mod channel_producer;
/// Output types for the channel producer.
pub mod output;
/// Producer trait implementation for the channel producer.
pub mod producer;

pub use channel_producer::ChannelProducer;
