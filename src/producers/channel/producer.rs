//! Producer implementation for the channel producer.

use super::channel_producer::ChannelProducer;
use crate::producer::{Producer, ProducerConfig};
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

impl<T> Producer for ChannelProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    // The receiver moves into the stream; a second produce call has nothing
    // left to drain and yields an empty stream.
    match self.rx.take() {
      Some(rx) => Box::pin(ReceiverStream::new(rx)),
      None => {
        debug!("channel producer receiver already consumed");
        Box::pin(futures::stream::empty())
      }
    }
  }

  fn set_config_impl(&mut self, config: ProducerConfig<T>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ProducerConfig<T> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig<T> {
    &mut self.config
  }
}
