use sensorstream::consumers::vec::VecConsumer;
use sensorstream::pipeline::PipelineBuilder;
use sensorstream::producers::channel::ChannelProducer;
use sensorstream::producers::sensor::SensorProducer;
use sensorstream::transformers::magnitude::MagnitudeTransformer;
use sensorstream::transformers::moving_average::MovingAverageTransformer;
use sensorstream::transformers::sample_interval::SampleIntervalTransformer;
use sensorstream::{Reading, SensorKind, SignalMonitor};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

fn feed<T: Send + 'static>(items: Vec<T>) -> mpsc::Receiver<T> {
  let (tx, rx) = mpsc::channel(items.len().max(1));
  tokio::spawn(async move {
    for item in items {
      if tx.send(item).await.is_err() {
        break;
      }
    }
  });
  rx
}

#[tokio::test]
async fn test_magnitude_pipeline() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
  let readings = vec![
    Reading::new(3.0, 4.0, 0.0),
    Reading::new(0.0, 0.0, 9.81),
    Reading::new(1.0, 2.0, 2.0),
  ];
  let rx = feed(readings);

  let consumer = PipelineBuilder::new()
    .producer(ChannelProducer::new(rx))
    .transformer(MagnitudeTransformer::new())
    .consumer(VecConsumer::new())
    .run()
    .await;

  let magnitudes = consumer.into_vec();
  assert_eq!(magnitudes.len(), 3);
  assert!((magnitudes[0] - 5.0).abs() < 1e-12);
  assert!((magnitudes[1] - 9.81).abs() < 1e-12);
  assert!((magnitudes[2] - 3.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_moving_average_pipeline_dilutes_from_zero() {
  let rx = feed(vec![3.0, 6.0, 9.0]);

  let consumer = PipelineBuilder::new()
    .producer(ChannelProducer::new(rx))
    .transformer(MovingAverageTransformer::new(3).unwrap())
    .consumer(VecConsumer::new())
    .run()
    .await;

  assert_eq!(consumer.into_vec(), vec![1.0, 3.0, 6.0]);
}

#[tokio::test]
async fn test_magnitude_then_moving_average() {
  // A steady 9.81 magnitude ramps up against the zero-filled window and
  // converges once the window holds only real samples.
  let readings = vec![Reading::new(0.0, 0.0, 9.81); 30];
  let rx = feed(readings);

  let consumer = PipelineBuilder::new()
    .producer(ChannelProducer::new(rx))
    .transformer(MagnitudeTransformer::new())
    .transformer(MovingAverageTransformer::new(25).unwrap())
    .consumer(VecConsumer::new())
    .run()
    .await;

  let smoothed = consumer.into_vec();
  assert_eq!(smoothed.len(), 30);
  assert!((smoothed[0] - 9.81 / 25.0).abs() < 1e-12);
  assert!(smoothed[10] < 9.81);
  assert!((smoothed[29] - 9.81).abs() < 1e-9);
}

#[tokio::test]
async fn test_sample_interval_then_moving_average() {
  let readings = vec![Reading::new(0.0, 0.0, 9.81); 10];
  let rx = feed(readings);

  let consumer = PipelineBuilder::new()
    .producer(ChannelProducer::new(rx))
    .transformer(SampleIntervalTransformer::new())
    .transformer(MovingAverageTransformer::new(25).unwrap())
    .consumer(VecConsumer::new())
    .run()
    .await;

  let smoothed = consumer.into_vec();
  assert_eq!(smoothed.len(), 10);
  assert!(smoothed.iter().all(|ms| ms.is_finite() && *ms >= 0.0));
}

#[tokio::test]
async fn test_bounded_sensor_producer() {
  let consumer = PipelineBuilder::new()
    .producer(SensorProducer::with_count(
      SensorKind::Gyroscope,
      240.0,
      12,
    ))
    .transformer(MagnitudeTransformer::new())
    .consumer(VecConsumer::new())
    .run()
    .await;

  let magnitudes = consumer.into_vec();
  assert_eq!(magnitudes.len(), 12);
  // A gyroscope at rest only carries noise.
  assert!(magnitudes.iter().all(|m| *m < 0.1));
}

#[tokio::test]
async fn test_monitors_track_signals_independently() {
  let start = Instant::now();
  let mut accel = SignalMonitor::new(SensorKind::Accelerometer);
  let mut gyro = SignalMonitor::new(SensorKind::Gyroscope);

  let frame_a = accel.observe_at(Reading::new(0.0, 0.0, 9.81), start + Duration::from_millis(100));
  let frame_g = gyro.observe_at(Reading::new(0.01, 0.0, 0.0), start + Duration::from_millis(400));

  assert_eq!(frame_a.kind, SensorKind::Accelerometer);
  assert_eq!(frame_g.kind, SensorKind::Gyroscope);
  // Each monitor smooths its own intervals; the gyro frame must not see the
  // accelerometer cadence.
  assert!(frame_g.interval_ms > frame_a.interval_ms);
}
