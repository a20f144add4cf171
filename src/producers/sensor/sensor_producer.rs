//! Builder and configuration for the sensor producer.

use crate::error::ErrorStrategy;
use crate::producer::ProducerConfig;
use crate::reading::{Reading, SensorKind};
use std::time::Duration;

/// A producer that emits synthetic [`Reading`]s at a fixed frequency.
///
/// Each reading is a kind-appropriate rest value (gravity on the z axis for
/// accelerometer-family sensors, near zero for the gyroscope, a typical field
/// strength for the magnetometer) plus small random noise, so downstream
/// smoothing has realistic jitter to chew on.
pub struct SensorProducer {
  /// The signal this producer simulates.
  pub kind: SensorKind,
  /// Emission interval, derived from the requested frequency.
  pub interval: Duration,
  /// Number of readings to emit; `None` streams forever.
  pub count: Option<usize>,
  /// Configuration for the producer, including error handling strategy.
  pub config: ProducerConfig<Reading>,
}

// The interval must stay representable and non-zero, so requested frequencies
// clamp into this band. NaN clamps to the minimum.
const MIN_FREQUENCY_HZ: f64 = 0.001;
const MAX_FREQUENCY_HZ: f64 = 1e9;

impl SensorProducer {
  /// Creates an unbounded producer emitting at `frequency` readings per second.
  ///
  /// Degenerate frequencies (zero, negative, NaN, infinite) are clamped to
  /// between 0.001 Hz and 1 GHz rather than rejected.
  pub fn new(kind: SensorKind, frequency: f64) -> Self {
    let hz = frequency.max(MIN_FREQUENCY_HZ).min(MAX_FREQUENCY_HZ);
    Self {
      kind,
      interval: Duration::from_secs_f64(1.0 / hz),
      count: None,
      config: ProducerConfig::default(),
    }
  }

  /// Creates a producer that stops after `count` readings.
  pub fn with_count(kind: SensorKind, frequency: f64, count: usize) -> Self {
    Self {
      count: Some(count),
      ..Self::new(kind, frequency)
    }
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<Reading>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the producer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }

  /// The resting reading noise is added to.
  pub(crate) fn rest_reading(&self) -> Reading {
    match self.kind {
      SensorKind::Accelerometer | SensorKind::Gravity => Reading::new(0.0, 0.0, 9.81),
      SensorKind::LinearAcceleration | SensorKind::Gyroscope => Reading::new(0.0, 0.0, 0.0),
      SensorKind::Magnetometer => Reading::new(22.0, 5.0, -43.0),
    }
  }

  /// Noise amplitude per kind, matching the magnitudes real sensors report.
  pub(crate) fn noise_amplitude(&self) -> f64 {
    match self.kind {
      SensorKind::Gyroscope => 0.002,
      SensorKind::Magnetometer => 0.5,
      _ => 0.05,
    }
  }
}
