//! Synthetic sensor producer module.
//!
//! Stands in for a granted device sensor: emits 3-axis readings at a fixed
//! frequency with a little random noise, for demos and tests.

/// Output types for the sensor producer.
pub mod output;
/// Producer trait implementation for the sensor producer.
pub mod producer;
/// Builder and configuration for the sensor producer.
pub mod sensor_producer;

pub use sensor_producer::SensorProducer;
