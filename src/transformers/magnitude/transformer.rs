//! Transformer implementation for the magnitude transformer.

use super::magnitude_transformer::MagnitudeTransformer;
use crate::input::Input;
use crate::output::Output;
use crate::reading::Reading;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{Stream, StreamExt};
use std::pin::Pin;

impl Input for MagnitudeTransformer {
  type Input = Reading;
  type InputStream = Pin<Box<dyn Stream<Item = Reading> + Send>>;
}

impl Output for MagnitudeTransformer {
  type Output = f64;
  type OutputStream = Pin<Box<dyn Stream<Item = f64> + Send>>;
}

impl Transformer for MagnitudeTransformer {
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    input.map(|reading| reading.magnitude()).boxed()
  }

  fn set_config_impl(&mut self, config: TransformerConfig<Reading>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<Reading> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<Reading> {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::stream;

  #[tokio::test]
  async fn test_maps_readings_to_magnitudes() {
    let mut transformer = MagnitudeTransformer::new();
    let input = Box::pin(stream::iter(vec![
      Reading::new(3.0, 4.0, 0.0),
      Reading::new(0.0, 0.0, 9.81),
    ]));
    let output: Vec<f64> = transformer.transform(input).collect().await;
    assert_eq!(output.len(), 2);
    assert!((output[0] - 5.0).abs() < 1e-12);
    assert!((output[1] - 9.81).abs() < 1e-12);
  }

  #[tokio::test]
  async fn test_empty_input_yields_empty_output() {
    let mut transformer = MagnitudeTransformer::new();
    let input: Pin<Box<dyn Stream<Item = Reading> + Send>> = Box::pin(stream::iter(vec![]));
    let output: Vec<f64> = transformer.transform(input).collect().await;
    assert!(output.is_empty());
  }
}
