//! Builder and configuration for the magnitude transformer.

use crate::error::ErrorStrategy;
use crate::reading::Reading;
use crate::transformer::TransformerConfig;

/// A transformer that maps each [`Reading`] to its vector magnitude.
#[derive(Debug, Clone, Default)]
pub struct MagnitudeTransformer {
  pub(crate) config: TransformerConfig<Reading>,
}

impl MagnitudeTransformer {
  /// Creates a magnitude transformer.
  pub fn new() -> Self {
    Self {
      config: TransformerConfig::default(),
    }
  }

  /// Sets the error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<Reading>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the transformer name.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}
