//! Producer implementation for the sensor producer.

use super::sensor_producer::SensorProducer;
use crate::producer::{Producer, ProducerConfig};
use crate::reading::Reading;
use futures::{stream, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time;
use tracing::trace;

impl Producer for SensorProducer {
  fn produce(&mut self) -> Self::OutputStream {
    let rest = self.rest_reading();
    let amplitude = self.noise_amplitude();
    let label = self.kind.label();
    let rng = StdRng::from_entropy();
    let interval = time::interval(self.interval);

    let stream = stream::unfold((rng, interval), move |(mut rng, mut interval)| async move {
      interval.tick().await;
      let reading = Reading::new(
        rest.x + rng.gen_range(-amplitude..=amplitude),
        rest.y + rng.gen_range(-amplitude..=amplitude),
        rest.z + rng.gen_range(-amplitude..=amplitude),
      );
      trace!(signal = label, ?reading, "synthetic reading");
      Some((reading, (rng, interval)))
    });

    match self.count {
      Some(n) => Box::pin(stream.take(n)),
      None => Box::pin(stream),
    }
  }

  fn set_config_impl(&mut self, config: ProducerConfig<Reading>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ProducerConfig<Reading> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig<Reading> {
    &mut self.config
  }
}
