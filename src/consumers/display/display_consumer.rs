//! Builder and configuration for the display consumer.

use crate::consumer::ConsumerConfig;
use crate::error::ErrorStrategy;
use std::marker::PhantomData;

/// A consumer that prints each item's `Display` rendering on its own line.
///
/// Feeding it [`SignalFrame`](crate::signal::SignalFrame)s reproduces the
/// per-reading text a sensor demo page writes into the document.
#[derive(Debug, Clone, Default)]
pub struct DisplayConsumer<T: std::fmt::Debug + Clone + Send + Sync + 'static> {
  pub(crate) config: ConsumerConfig<T>,
  pub(crate) _type: PhantomData<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> DisplayConsumer<T> {
  /// Creates a display consumer.
  pub fn new() -> Self {
    Self {
      config: ConsumerConfig::default(),
      _type: PhantomData,
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
