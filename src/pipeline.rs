//! Single-signal pipeline assembly.
//!
//! A pipeline is one producer, any number of transformers, and one consumer,
//! assembled left to right. Each monitored signal gets its own pipeline; the
//! pipelines never synchronize with each other.
//!
//! The builder threads the concrete stream type through its type parameter, so
//! a stage can only be attached when its input type matches what the previous
//! stage emits.

use crate::consumer::Consumer;
use crate::producer::Producer;
use crate::transformer::Transformer;

/// Builder for a signal pipeline.
///
/// Starts empty, gains a producer, then transformers, then a consumer:
///
/// ```rust
/// use sensorstream::consumers::vec::VecConsumer;
/// use sensorstream::pipeline::PipelineBuilder;
/// use sensorstream::producers::sensor::SensorProducer;
/// use sensorstream::reading::SensorKind;
/// use sensorstream::transformers::magnitude::MagnitudeTransformer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let consumer = PipelineBuilder::new()
///   .producer(SensorProducer::with_count(SensorKind::Accelerometer, 60.0, 5))
///   .transformer(MagnitudeTransformer::new())
///   .consumer(VecConsumer::new())
///   .run()
///   .await;
/// assert_eq!(consumer.into_vec().len(), 5);
/// # }
/// ```
pub struct PipelineBuilder<S> {
  stream: S,
}

impl PipelineBuilder<()> {
  /// Creates an empty builder.
  pub fn new() -> Self {
    Self { stream: () }
  }

  /// Attaches the producer, fixing the pipeline's initial stream.
  pub fn producer<P>(self, mut producer: P) -> PipelineBuilder<P::OutputStream>
  where
    P: Producer,
    P::Output: std::fmt::Debug + Clone + Send + Sync,
  {
    PipelineBuilder {
      stream: producer.produce(),
    }
  }
}

impl Default for PipelineBuilder<()> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S> PipelineBuilder<S> {
  /// Attaches a transformer whose input type matches the current stream.
  pub fn transformer<T>(self, mut transformer: T) -> PipelineBuilder<T::OutputStream>
  where
    T: Transformer,
    T::Input: std::fmt::Debug + Clone + Send + Sync,
    T::InputStream: From<S>,
  {
    PipelineBuilder {
      stream: transformer.transform(self.stream.into()),
    }
  }

  /// Attaches the consumer, completing the pipeline.
  pub fn consumer<C>(self, consumer: C) -> Pipeline<S, C>
  where
    C: Consumer,
    C::Input: std::fmt::Debug + Clone + Send + Sync,
    C::InputStream: From<S>,
  {
    Pipeline {
      stream: self.stream,
      consumer,
    }
  }
}

/// A fully assembled pipeline, ready to run.
pub struct Pipeline<S, C> {
  stream: S,
  consumer: C,
}

impl<S, C> Pipeline<S, C>
where
  C: Consumer,
  C::Input: std::fmt::Debug + Clone + Send + Sync,
  C::InputStream: From<S>,
{
  /// Drives the stream into the consumer until the stream ends.
  ///
  /// Component failures surface through each component's error strategy;
  /// running itself cannot fail, so the consumer comes back directly for
  /// callers to inspect what it collected.
  pub async fn run(self) -> C {
    let Pipeline {
      stream,
      mut consumer,
    } = self;
    consumer.consume(stream.into()).await;
    consumer
  }
}
