//! Fixed-window running averager.
//!
//! The smoothing core of the crate. An [`Averager`] keeps an ordered window of
//! the most recent `capacity` samples and reports the arithmetic mean of the
//! window on every insertion. One instance exists per monitored signal.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Error returned when an [`Averager`] is constructed with an unusable
/// window capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
  /// The requested window capacity was zero; the window must hold at least
  /// one sample.
  #[error("window capacity must be at least 1")]
  Zero,
}

/// Fixed-capacity running averager.
///
/// The window is populated with `capacity` zeros at construction and always
/// holds exactly `capacity` elements. Each [`sample`](Averager::sample) call
/// evicts the oldest element, appends the new one, and returns the mean of the
/// updated window. Early samples are therefore diluted toward zero until the
/// window has turned over once.
///
/// Instances are exclusively owned; all mutation goes through `&mut self`, so
/// a caller with genuine parallelism must serialize access itself.
///
/// # Example
///
/// ```rust
/// use sensorstream::averager::Averager;
///
/// let mut avg = Averager::new(3).unwrap();
/// assert_eq!(avg.sample(3.0), 1.0); // window [0, 0, 3]
/// assert_eq!(avg.sample(6.0), 3.0); // window [0, 3, 6]
/// assert_eq!(avg.sample(9.0), 6.0); // window [3, 6, 9]
/// ```
#[derive(Debug, Clone)]
pub struct Averager {
  window: VecDeque<f64>,
}

impl Averager {
  /// Creates an averager whose window holds `capacity` zeros.
  ///
  /// # Errors
  ///
  /// Returns [`CapacityError::Zero`] when `capacity` is 0.
  pub fn new(capacity: usize) -> Result<Self, CapacityError> {
    match NonZeroUsize::new(capacity) {
      Some(capacity) => Ok(Self::with_capacity(capacity)),
      None => Err(CapacityError::Zero),
    }
  }

  /// Creates an averager from a capacity already known to be non-zero.
  pub fn with_capacity(capacity: NonZeroUsize) -> Self {
    let mut window = VecDeque::with_capacity(capacity.get());
    window.extend(std::iter::repeat(0.0).take(capacity.get()));
    Self { window }
  }

  /// Returns the fixed window capacity.
  pub fn capacity(&self) -> usize {
    self.window.len()
  }

  /// Pushes `value` into the window, evicting the oldest sample, and returns
  /// the arithmetic mean of the updated window.
  ///
  /// The window is re-summed on every call; the window is small enough that
  /// a running-sum shortcut is not worth the changed float summation order.
  ///
  /// Non-finite values are not rejected; they propagate through the mean the
  /// way ordinary float arithmetic propagates them.
  pub fn sample(&mut self, value: f64) -> f64 {
    self.window.pop_front();
    self.window.push_back(value);
    let sum: f64 = self.window.iter().sum();
    sum / self.window.len() as f64
  }
}
