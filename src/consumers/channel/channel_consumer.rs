//! Builder and configuration for the channel consumer.

use crate::consumer::ConsumerConfig;
use crate::error::ErrorStrategy;
use tokio::sync::mpsc;

/// A consumer that forwards each item into a `tokio::sync::mpsc` sender.
///
/// Forwarding stops early if the receiving side is dropped; the rest of the
/// stream is discarded in that case.
#[derive(Debug, Clone)]
pub struct ChannelConsumer<T: std::fmt::Debug + Clone + Send + Sync + 'static> {
  pub(crate) tx: mpsc::Sender<T>,
  pub(crate) config: ConsumerConfig<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> ChannelConsumer<T> {
  /// Creates a consumer forwarding into the given sender.
  pub fn new(tx: mpsc::Sender<T>) -> Self {
    Self {
      tx,
      config: ConsumerConfig::default(),
    }
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the consumer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = name;
    self
  }
}
