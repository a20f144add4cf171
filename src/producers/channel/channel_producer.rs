//! Builder and configuration for the channel producer.

use crate::error::ErrorStrategy;
use crate::producer::ProducerConfig;
use tokio::sync::mpsc;

/// A producer that streams items received on a `tokio::sync::mpsc` channel.
///
/// One channel per monitored signal: the host's reading callback sends each
/// observation into the sender half, and the pipeline drains the receiver.
/// The stream ends when every sender is dropped.
pub struct ChannelProducer<T: std::fmt::Debug + Clone + Send + Sync> {
  pub(crate) rx: Option<mpsc::Receiver<T>>,
  pub(crate) config: ProducerConfig<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync> ChannelProducer<T> {
  /// Creates a producer draining the given receiver.
  pub fn new(rx: mpsc::Receiver<T>) -> Self {
    Self {
      rx: Some(rx),
      config: ProducerConfig::default(),
    }
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the producer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}
