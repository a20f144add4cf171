//! Per-signal monitoring context.
//!
//! A [`SignalMonitor`] groups everything one monitored signal needs: its
//! [`SensorKind`], the fixed-window averager smoothing its inter-reading
//! interval, and the instant of the previous reading. Host code constructs one
//! monitor per granted sensor and calls [`observe`](SignalMonitor::observe)
//! from that sensor's reading callback; no monitor is shared across signals.

use crate::averager::{Averager, CapacityError};
use crate::reading::{Reading, SensorKind};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::trace;

/// Window capacity used to smooth inter-reading intervals.
///
/// At the tens-of-Hz rates sensors report at, 25 samples covers well under a
/// second of history while flattening scheduler jitter.
pub const DEFAULT_SMOOTHING_WINDOW: NonZeroUsize = match NonZeroUsize::new(25) {
  Some(window) => window,
  None => unreachable!(),
};

/// Long-lived context for one monitored signal.
///
/// The interval reference point is seeded at construction, so the first
/// observed interval measures time since the monitor was created (the page
/// load, in the originating setting). Combined with the zero-filled averager
/// window, reported intervals ramp up from near zero while the window fills.
#[derive(Debug)]
pub struct SignalMonitor {
  kind: SensorKind,
  interval_avg: Averager,
  last_reading: Instant,
}

impl SignalMonitor {
  /// Creates a monitor with the default smoothing window.
  pub fn new(kind: SensorKind) -> Self {
    Self {
      kind,
      interval_avg: Averager::with_capacity(DEFAULT_SMOOTHING_WINDOW),
      last_reading: Instant::now(),
    }
  }

  /// Creates a monitor smoothing intervals over `window` samples.
  ///
  /// # Errors
  ///
  /// Returns [`CapacityError::Zero`] when `window` is 0.
  pub fn with_window(kind: SensorKind, window: usize) -> Result<Self, CapacityError> {
    Ok(Self {
      kind,
      interval_avg: Averager::new(window)?,
      last_reading: Instant::now(),
    })
  }

  /// The signal this monitor tracks.
  pub fn kind(&self) -> SensorKind {
    self.kind
  }

  /// Records a reading arriving now and returns its rendered frame.
  pub fn observe(&mut self, reading: Reading) -> SignalFrame {
    self.observe_at(reading, Instant::now())
  }

  /// Records a reading with an explicit arrival instant.
  ///
  /// Instants earlier than the previous reading count as a zero interval.
  pub fn observe_at(&mut self, reading: Reading, at: Instant) -> SignalFrame {
    let elapsed_ms = at.saturating_duration_since(self.last_reading).as_secs_f64() * 1000.0;
    let interval_ms = self.interval_avg.sample(elapsed_ms);
    self.last_reading = at;
    trace!(signal = self.kind.label(), elapsed_ms, interval_ms, "reading observed");
    SignalFrame {
      kind: self.kind,
      reading,
      magnitude: reading.magnitude(),
      interval_ms,
    }
  }
}

/// One rendered observation: raw axes, vector magnitude, and the smoothed
/// inter-reading interval in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalFrame {
  /// Signal that produced this frame.
  pub kind: SensorKind,
  /// The raw reading.
  pub reading: Reading,
  /// Euclidean magnitude of the reading.
  pub magnitude: f64,
  /// Smoothed inter-reading interval, milliseconds.
  pub interval_ms: f64,
}

impl fmt::Display for SignalFrame {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let unit = self.kind.unit();
    let p = self.kind.precision();
    write!(
      f,
      "{}: x: {:.p$}{unit} y: {:.p$}{unit} z: {:.p$}{unit} mag: {:.p$}{unit} time: {:.2}ms",
      self.kind, self.reading.x, self.reading.y, self.reading.z, self.magnitude, self.interval_ms,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_zero_window_rejected() {
    assert!(SignalMonitor::with_window(SensorKind::Gravity, 0).is_err());
  }

  #[test]
  fn test_default_window_dilutes_first_interval() {
    let mut monitor = SignalMonitor::new(SensorKind::Gravity);
    let start = Instant::now();
    let frame = monitor.observe_at(Reading::new(0.0, 0.0, 9.81), start + Duration::from_millis(100));
    // 100ms spread over the default 25-sample window.
    assert!((frame.interval_ms - 4.0).abs() < 0.5);
  }

  #[test]
  fn test_first_interval_is_diluted() {
    let mut monitor = SignalMonitor::with_window(SensorKind::Accelerometer, 25).unwrap();
    let start = Instant::now();
    let frame = monitor.observe_at(Reading::new(0.0, 0.0, 9.81), start + Duration::from_millis(100));
    // 100ms against 24 zeros in the window.
    assert!((frame.interval_ms - 4.0).abs() < 0.5);
  }

  #[test]
  fn test_interval_converges_on_steady_rate() {
    let mut monitor = SignalMonitor::with_window(SensorKind::Gyroscope, 25).unwrap();
    let mut at = Instant::now();
    let mut frame = monitor.observe_at(Reading::new(0.0, 0.0, 0.0), at);
    for _ in 0..25 {
      at += Duration::from_millis(16);
      frame = monitor.observe_at(Reading::new(0.0, 0.0, 0.0), at);
    }
    assert!((frame.interval_ms - 16.0).abs() < 0.1);
  }

  #[test]
  fn test_out_of_order_instant_counts_as_zero() {
    let mut monitor = SignalMonitor::with_window(SensorKind::Magnetometer, 1).unwrap();
    let past = Instant::now() - Duration::from_secs(1);
    let frame = monitor.observe_at(Reading::new(1.0, 0.0, 0.0), past);
    assert_eq!(frame.interval_ms, 0.0);
  }

  #[test]
  fn test_frame_formatting_uses_kind_conventions() {
    let frame = SignalFrame {
      kind: SensorKind::Accelerometer,
      reading: Reading::new(0.0, 0.0, 9.81),
      magnitude: 9.81,
      interval_ms: 16.73,
    };
    assert_eq!(
      frame.to_string(),
      "accelerometer: x: 0.00m/s^2 y: 0.00m/s^2 z: 9.81m/s^2 mag: 9.81m/s^2 time: 16.73ms"
    );

    let frame = SignalFrame {
      kind: SensorKind::Gyroscope,
      reading: Reading::new(0.0001, 0.0, 0.0),
      magnitude: 0.0001,
      interval_ms: 16.0,
    };
    assert!(frame.to_string().contains("x: 0.0001rad/s"));
  }

  #[test]
  fn test_monitors_are_independent() {
    let mut a = SignalMonitor::with_window(SensorKind::Accelerometer, 2).unwrap();
    let mut b = SignalMonitor::with_window(SensorKind::Gyroscope, 2).unwrap();
    let start = Instant::now();
    a.observe_at(Reading::new(1.0, 0.0, 0.0), start + Duration::from_millis(10));
    let frame = b.observe_at(Reading::new(0.0, 1.0, 0.0), start + Duration::from_millis(500));
    // b's interval is unaffected by a's observations.
    assert!(frame.interval_ms >= 250.0 - 1.0);
  }
}
