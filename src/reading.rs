//! Sensor reading types.
//!
//! A [`Reading`] is one 3-axis observation from a device sensor; [`SensorKind`]
//! names the five signals this crate monitors and carries their display
//! conventions (unit suffix and axis precision).

use std::fmt;

/// The device sensor signals this crate monitors.
///
/// Each kind is an independent signal with its own reading stream; no ordering
/// is guaranteed or implied across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
  /// Acceleration including gravity.
  Accelerometer,
  /// Acceleration with the gravity contribution removed.
  LinearAcceleration,
  /// The isolated gravity vector.
  Gravity,
  /// Angular velocity.
  Gyroscope,
  /// Ambient magnetic field.
  Magnetometer,
}

impl SensorKind {
  /// Unit suffix appended to rendered axis values and magnitudes.
  pub fn unit(&self) -> &'static str {
    match self {
      SensorKind::Accelerometer | SensorKind::LinearAcceleration | SensorKind::Gravity => "m/s^2",
      SensorKind::Gyroscope => "rad/s",
      SensorKind::Magnetometer => "uT",
    }
  }

  /// Number of decimals used when rendering axis values and magnitudes.
  ///
  /// Gyroscope values sit close to zero at rest, so they get extra digits.
  pub fn precision(&self) -> usize {
    match self {
      SensorKind::Gyroscope => 4,
      _ => 2,
    }
  }

  /// Stable lower-case label, used in logs and display frames.
  pub fn label(&self) -> &'static str {
    match self {
      SensorKind::Accelerometer => "accelerometer",
      SensorKind::LinearAcceleration => "linear-acceleration",
      SensorKind::Gravity => "gravity",
      SensorKind::Gyroscope => "gyroscope",
      SensorKind::Magnetometer => "magnetometer",
    }
  }
}

impl fmt::Display for SensorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// One 3-axis observation from a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
  /// X-axis component.
  pub x: f64,
  /// Y-axis component.
  pub y: f64,
  /// Z-axis component.
  pub z: f64,
}

impl Reading {
  /// Creates a reading from its axis components.
  pub fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Euclidean magnitude of the axis vector.
  pub fn magnitude(&self) -> f64 {
    (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn test_units_per_kind() {
    assert_eq!(SensorKind::Accelerometer.unit(), "m/s^2");
    assert_eq!(SensorKind::LinearAcceleration.unit(), "m/s^2");
    assert_eq!(SensorKind::Gravity.unit(), "m/s^2");
    assert_eq!(SensorKind::Gyroscope.unit(), "rad/s");
    assert_eq!(SensorKind::Magnetometer.unit(), "uT");
  }

  #[test]
  fn test_gyroscope_gets_extra_precision() {
    assert_eq!(SensorKind::Gyroscope.precision(), 4);
    assert_eq!(SensorKind::Accelerometer.precision(), 2);
  }

  #[test]
  fn test_magnitude_of_axis_aligned_reading() {
    assert_eq!(Reading::new(3.0, 0.0, 0.0).magnitude(), 3.0);
    assert_eq!(Reading::new(0.0, -4.0, 0.0).magnitude(), 4.0);
    assert_eq!(Reading::new(3.0, 4.0, 0.0).magnitude(), 5.0);
  }

  proptest! {
    #[test]
    fn test_magnitude_is_non_negative(
      x in -1e3..1e3f64,
      y in -1e3..1e3f64,
      z in -1e3..1e3f64,
    ) {
      prop_assert!(Reading::new(x, y, z).magnitude() >= 0.0);
    }

    #[test]
    fn test_magnitude_is_sign_invariant(
      x in -1e3..1e3f64,
      y in -1e3..1e3f64,
      z in -1e3..1e3f64,
    ) {
      let pos = Reading::new(x, y, z).magnitude();
      let neg = Reading::new(-x, -y, -z).magnitude();
      prop_assert_eq!(pos, neg);
    }
  }
}
