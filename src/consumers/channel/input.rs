//! Input wiring for the channel consumer.

use super::channel_consumer::ChannelConsumer;
use crate::input::Input;
use futures::Stream;
use std::pin::Pin;

impl<T> Input for ChannelConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}
