//! Magnitude transformer module.
//!
//! Maps 3-axis readings to their Euclidean magnitude.

/// Builder and configuration for the magnitude transformer.
pub mod magnitude_transformer;
/// Transformer trait implementation for the magnitude transformer.
pub mod transformer;

pub use magnitude_transformer::MagnitudeTransformer;
