//! Built-in producer implementations.
//!
//! Producers are where sensor readings enter a pipeline: a channel fed by a
//! host platform callback, or a synthetic sensor for demos and tests.

/// Channel producer bridging host callbacks into a pipeline.
pub mod channel;
/// Synthetic sensor producer emitting readings at a fixed frequency.
pub mod sensor;
