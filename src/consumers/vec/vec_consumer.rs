//! Builder and configuration for the vec consumer.

use crate::consumer::ConsumerConfig;
use crate::error::ErrorStrategy;

/// A consumer that collects every item into a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct VecConsumer<T: std::fmt::Debug + Clone + Send + Sync + 'static> {
  pub(crate) vec: Vec<T>,
  pub(crate) config: ConsumerConfig<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> VecConsumer<T> {
  /// Creates an empty vec consumer.
  pub fn new() -> Self {
    Self {
      vec: Vec::new(),
      config: ConsumerConfig::default(),
    }
  }

  /// Creates a vec consumer with pre-allocated capacity.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      vec: Vec::with_capacity(capacity),
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

  /// Returns the collected items, consuming the consumer.
  pub fn into_vec(self) -> Vec<T> {
    self.vec
  }

  /// Returns the collected items.
  pub fn items(&self) -> &[T] {
    &self.vec
  }
}
