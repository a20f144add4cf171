//! # SensorStream
//!
//! Stream-first smoothing and monitoring for motion and orientation sensors.
//!
//! SensorStream turns raw sensor feeds (accelerometer, gyroscope, magnetometer
//! and their derived variants) into smoothed, displayable readings. The core is
//! a fixed-window [`Averager`] that dilutes early samples against a zero-filled
//! window, mirroring how a signal ramps up from rest. Around it sits a small
//! producer/transformer/consumer pipeline layer for wiring sensor feeds to
//! sinks.
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorstream::Averager;
//!
//! # fn main() -> Result<(), sensorstream::CapacityError> {
//! let mut avg = Averager::new(3)?;
//! assert_eq!(avg.sample(3.0), 1.0);
//! assert_eq!(avg.sample(6.0), 3.0);
//! assert_eq!(avg.sample(9.0), 6.0);
//! # Ok(())
//! # }
//! ```
//!
//! Pipelines connect a producer to a consumer through any number of
//! transformers:
//!
//! ```rust,no_run
//! use sensorstream::pipeline::PipelineBuilder;
//! use sensorstream::producers::sensor::SensorProducer;
//! use sensorstream::transformers::magnitude::MagnitudeTransformer;
//! use sensorstream::consumers::vec::VecConsumer;
//! use sensorstream::SensorKind;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let consumer = PipelineBuilder::new()
//!   .producer(SensorProducer::with_count(SensorKind::Accelerometer, 60.0, 120))
//!   .transformer(MagnitudeTransformer::new())
//!   .consumer(VecConsumer::new())
//!   .run()
//!   .await;
//! println!("captured {} magnitudes", consumer.items().len());
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Fixed-capacity moving average over a zero-filled window.
pub mod averager;
/// The consumer trait and its configuration.
pub mod consumer;
/// Built-in consumers: channel, display, vec.
pub mod consumers;
/// Error types and handling strategies for pipelines.
pub mod error;
/// Input trait for components that receive a stream.
pub mod input;
/// Output trait for components that emit a stream.
pub mod output;
/// Pipeline builder connecting producers, transformers and consumers.
pub mod pipeline;
/// The producer trait and its configuration.
pub mod producer;
/// Built-in producers: channel, sensor.
pub mod producers;
/// Three-axis sensor readings and sensor kinds.
pub mod reading;
/// Per-signal monitoring: smoothed sample intervals and display frames.
pub mod signal;
/// The transformer trait and its configuration.
pub mod transformer;
/// Built-in transformers: magnitude, moving average, sample interval.
pub mod transformers;

pub use averager::{Averager, CapacityError};
pub use input::Input;
pub use output::Output;
pub use reading::{Reading, SensorKind};
pub use signal::{SignalFrame, SignalMonitor, DEFAULT_SMOOTHING_WINDOW};
