//! Consumer implementation for the vec consumer.

use super::vec_consumer::VecConsumer;
use crate::consumer::{Consumer, ConsumerConfig};
use async_trait::async_trait;
use futures::StreamExt;

#[async_trait]
impl<T> Consumer for VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  async fn consume(&mut self, mut stream: Self::InputStream) {
    while let Some(value) = stream.next().await {
      self.vec.push(value);
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
  use proptest::prelude::*;
  use tokio::runtime::Runtime;

  async fn collect_roundtrip(input: Vec<i32>) {
    let mut consumer = VecConsumer::new();
    let boxed = Box::pin(stream::iter(input.clone()));
    consumer.consume(boxed).await;
    assert_eq!(consumer.into_vec(), input);
  }

  proptest! {
    #[test]
    fn test_collects_all_items_in_order(
      input in prop::collection::vec(any::<i32>(), 0..50)
    ) {
      let rt = Runtime::new().unwrap();
      rt.block_on(collect_roundtrip(input));
    }
  }

  #[tokio::test]
  async fn test_empty_stream_collects_nothing() {
    let mut consumer = VecConsumer::<f64>::new();
    let boxed = Box::pin(stream::iter(Vec::<f64>::new()));
    consumer.consume(boxed).await;
    assert!(consumer.items().is_empty());
  }

  #[tokio::test]
  async fn test_with_capacity_preserves_behavior() {
    let mut consumer = VecConsumer::with_capacity(16);
    let boxed = Box::pin(stream::iter(vec![1.5, 2.5]));
    consumer.consume(boxed).await;
    assert_eq!(consumer.items(), &[1.5, 2.5]);
  }
}
