//! Consumer implementation for the display consumer.

use super::display_consumer::DisplayConsumer;
use crate::consumer::{Consumer, ConsumerConfig};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;

#[async_trait]
impl<T> Consumer for DisplayConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + std::fmt::Display + 'static,
{
  async fn consume(&mut self, mut stream: Self::InputStream) {
    let mut count: u64 = 0;
    while let Some(value) = stream.next().await {
      println!("{}", value);
      count += 1;
    }
    debug!(consumer = %self.config.name, count, "display stream ended");
  }

  fn set_config_impl(&mut self, config: ConsumerConfig<T>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ConsumerConfig<T> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig<T> {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::signal::SignalFrame;
  use crate::reading::{Reading, SensorKind};
  use futures::stream;

  #[tokio::test]
  async fn test_consumes_frames_to_completion() {
    let mut consumer = DisplayConsumer::<SignalFrame>::new();
    let frame = SignalFrame {
      kind: SensorKind::Magnetometer,
      reading: Reading::new(22.0, 5.0, -43.0),
      magnitude: Reading::new(22.0, 5.0, -43.0).magnitude(),
      interval_ms: 16.0,
    };
    let input = Box::pin(stream::iter(vec![frame, frame]));
    consumer.consume(input).await;
  }

  #[tokio::test]
  async fn test_consumes_plain_values() {
    let mut consumer = DisplayConsumer::<f64>::new().with_name("magnitude".to_string());
    let input = Box::pin(stream::iter(vec![1.0, 2.0, 3.0]));
    consumer.consume(input).await;
    assert_eq!(consumer.component_info().name, "magnitude");
  }
}
