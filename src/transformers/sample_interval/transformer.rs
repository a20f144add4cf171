//! Transformer implementation for the sample interval transformer.

use super::sample_interval_transformer::SampleIntervalTransformer;
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::time::Instant;

impl<T> Input for SampleIntervalTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}

impl<T> Output for SampleIntervalTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = f64;
  type OutputStream = Pin<Box<dyn Stream<Item = f64> + Send>>;
}

impl<T> Transformer for SampleIntervalTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut last = self.origin;
    input
      .map(move |_item| {
        let now = Instant::now();
        let elapsed_ms = now.saturating_duration_since(last).as_secs_f64() * 1000.0;
        last = now;
        elapsed_ms
      })
      .boxed()
  }

  fn set_config_impl(&mut self, config: TransformerConfig<T>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<T> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<T> {
    &mut self.config
  }
}
