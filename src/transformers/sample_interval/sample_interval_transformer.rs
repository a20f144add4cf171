//! Builder and configuration for the sample interval transformer.

use crate::error::ErrorStrategy;
use crate::transformer::TransformerConfig;
use std::time::Instant;

/// A transformer that replaces each item with the elapsed milliseconds since
/// the previous item arrived.
///
/// The first item is measured against the transformer's construction instant,
/// so the first interval includes whatever setup time passed before the signal
/// started reporting. Feed the output into a
/// [`MovingAverageTransformer`](crate::transformers::moving_average::MovingAverageTransformer)
/// to smooth scheduler jitter out of the displayed rate.
#[derive(Debug, Clone)]
pub struct SampleIntervalTransformer<T: std::fmt::Debug + Clone + Send + Sync> {
  pub(crate) config: TransformerConfig<T>,
  pub(crate) origin: Instant,
}

impl<T: std::fmt::Debug + Clone + Send + Sync> SampleIntervalTransformer<T> {
  /// Creates a transformer whose first interval is measured from now.
  pub fn new() -> Self {
    Self {
      config: TransformerConfig::default(),
      origin: Instant::now(),
    }
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the transformer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Default for SampleIntervalTransformer<T> {
  fn default() -> Self {
    Self::new()
  }
}
