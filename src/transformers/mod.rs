//! Built-in transformer implementations.
//!
//! The per-signal computations: vector magnitude, inter-arrival measurement,
//! and fixed-window smoothing.

/// Magnitude transformer deriving the Euclidean norm of each reading.
pub mod magnitude;
/// Moving average transformer smoothing a value series.
pub mod moving_average;
/// Sample interval transformer measuring inter-arrival time.
pub mod sample_interval;
