//! Input wiring for the display consumer.

use super::display_consumer::DisplayConsumer;
use crate::input::Input;
use futures::Stream;
use std::pin::Pin;

impl<T> Input for DisplayConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + std::fmt::Display + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}
