//! Transformer implementation for the moving average.

use super::moving_average_transformer::MovingAverageTransformer;
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{Stream, StreamExt};
use std::pin::Pin;

impl Input for MovingAverageTransformer {
  type Input = f64;
  type InputStream = Pin<Box<dyn Stream<Item = f64> + Send>>;
}

impl Output for MovingAverageTransformer {
  type Output = f64;
  type OutputStream = Pin<Box<dyn Stream<Item = f64> + Send>>;
}

impl Transformer for MovingAverageTransformer {
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut averager = self.averager.clone();
    input.map(move |value| averager.sample(value)).boxed()
  }

  fn set_config_impl(&mut self, config: TransformerConfig<f64>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<f64> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<f64> {
    &mut self.config
  }
}
