//! Sample interval transformer module.
//!
//! Measures the wall-clock time between consecutive stream items.

/// Builder and configuration for the sample interval transformer.
pub mod sample_interval_transformer;
/// Transformer trait implementation for the sample interval transformer.
pub mod transformer;

pub use sample_interval_transformer::SampleIntervalTransformer;
