//! Moving average transformer module.
//!
//! Streams values through a fixed-window [`crate::averager::Averager`].

/// Builder and configuration for the moving average transformer.
pub mod moving_average_transformer;
/// Transformer trait implementation for the moving average.
pub mod transformer;

pub use moving_average_transformer::MovingAverageTransformer;
