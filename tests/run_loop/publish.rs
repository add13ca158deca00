use crate::stubs::{run_loop, settings, FailingClient, RecordingClient, SilentClient, SEED};
use datagen_encoding::{avro, OutputFormat};
use datagen_event::{Event, EventGenerator};
use std::time::Duration;

#[tokio::test]
async fn test_publish_sends_each_event_once() {
    let mut run_loop = run_loop(
        settings(4, false),
        OutputFormat::Json,
        RecordingClient::default(),
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;

    assert_eq!(metrics.iterations, 4);
    assert_eq!(metrics.published, 4);
    assert_eq!(metrics.publish_failures, 0);
    assert!(run_loop.output().is_empty());

    let sent = run_loop.publisher().client().sent();
    assert_eq!(sent.len(), 4);

    let mut expected = EventGenerator::new(SEED);
    for (topic, payload) in sent {
        assert_eq!(topic, "datagen-test");
        let event: Event = serde_json::from_slice(&payload).unwrap();
        let reference = expected.generate();
        assert_eq!(event.goodness(), reference.goodness());
        assert_eq!(event.event_type(), reference.event_type());
    }
}

#[tokio::test]
async fn test_publish_avro_payloads() {
    let mut run_loop = run_loop(
        settings(3, false),
        OutputFormat::Avro,
        RecordingClient::default(),
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;
    assert_eq!(metrics.published, 3);

    let mut expected = EventGenerator::new(SEED);
    for (_, payload) in run_loop.publisher().client().sent() {
        let event = avro::decode_event(&payload).unwrap();
        let reference = expected.generate();
        assert_eq!(event.goodness(), reference.goodness());
        assert_eq!(event.event_type(), reference.event_type());
    }
}

#[tokio::test]
async fn test_unacknowledged_sends_do_not_stop_the_loop() {
    let mut run_loop = run_loop(
        settings(3, false),
        OutputFormat::Json,
        SilentClient,
        Duration::from_millis(10),
    );

    let metrics = run_loop.run().await;

    assert_eq!(metrics.iterations, 3);
    assert_eq!(metrics.published, 0);
    assert_eq!(metrics.publish_failures, 3);
}

#[tokio::test]
async fn test_failed_sends_do_not_stop_the_loop() {
    let mut run_loop = run_loop(
        settings(5, false),
        OutputFormat::Avro,
        FailingClient,
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;

    assert_eq!(metrics.iterations, 5);
    assert_eq!(metrics.publish_failures, 5);
    assert_eq!(metrics.encode_failures, 0);
}
