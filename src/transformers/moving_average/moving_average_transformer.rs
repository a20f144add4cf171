//! Builder and configuration for the moving average transformer.

use crate::averager::{Averager, CapacityError};
use crate::error::ErrorStrategy;
use crate::transformer::TransformerConfig;

/// A transformer that smooths an `f64` stream through a fixed-window
/// [`Averager`].
///
/// The window starts full of zeros, so early outputs are diluted toward zero
/// until `capacity` samples have flowed through; from then on each output is
/// the mean of the last `capacity` inputs. Each call to `transform` starts
/// from a fresh zero-filled window.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use sensorstream::transformer::Transformer;
/// use sensorstream::transformers::moving_average::MovingAverageTransformer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut transformer = MovingAverageTransformer::new(3).unwrap();
/// let input = Box::pin(futures::stream::iter(vec![3.0, 6.0, 9.0]));
/// let output: Vec<f64> = transformer.transform(input).collect().await;
/// assert_eq!(output, vec![1.0, 3.0, 6.0]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverageTransformer {
  pub(crate) config: TransformerConfig<f64>,
  pub(crate) averager: Averager,
}

impl MovingAverageTransformer {
  /// Creates a transformer smoothing over the last `capacity` values.
  ///
  /// # Errors
  ///
  /// Returns [`CapacityError::Zero`] when `capacity` is 0.
  pub fn new(capacity: usize) -> Result<Self, CapacityError> {
    Ok(Self {
      config: TransformerConfig::default(),
      averager: Averager::new(capacity)?,
    })
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<f64>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the transformer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }

  /// Returns the window capacity.
  pub fn capacity(&self) -> usize {
    self.averager.capacity()
  }
}
