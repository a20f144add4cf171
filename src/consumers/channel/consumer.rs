//! Consumer implementation for the channel consumer.

use super::channel_consumer::ChannelConsumer;
use crate::consumer::{Consumer, ConsumerConfig};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;

#[async_trait]
impl<T> Consumer for ChannelConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  async fn consume(&mut self, mut stream: Self::InputStream) {
    while let Some(value) = stream.next().await {
      if self.tx.send(value).await.is_err() {
        debug!(consumer = %self.config.name, "receiver dropped, discarding rest of stream");
        break;
      }
    }
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
  use futures::stream;
  use tokio::sync::mpsc;

  #[tokio::test]
  async fn test_forwards_items_in_order() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut consumer = ChannelConsumer::new(tx);
    let input = Box::pin(stream::iter(vec![1.0, 2.0, 3.0]));
    consumer.consume(input).await;
    drop(consumer);
    let mut received = Vec::new();
    while let Some(value) = rx.recv().await {
      received.push(value);
    }
    assert_eq!(received, vec![1.0, 2.0, 3.0]);
  }

  #[tokio::test]
  async fn test_stops_when_receiver_dropped() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let mut consumer = ChannelConsumer::new(tx);
    let input = Box::pin(stream::iter(vec![1, 2, 3]));
    // Must terminate rather than hang on a closed channel.
    consumer.consume(input).await;
  }
}
