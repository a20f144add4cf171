//! Output wiring for the sensor producer.

use super::sensor_producer::SensorProducer;
use crate::output::Output;
use crate::reading::Reading;
use futures::Stream;
use std::pin::Pin;

impl Output for SensorProducer {
  type Output = Reading;
  type OutputStream = Pin<Box<dyn Stream<Item = Reading> + Send>>;
}
