use crate::stubs::{run_loop, settings, RecordingClient, SEED};
use datagen_encoding::OutputFormat;
use datagen_event::{Event, EventGenerator};
use std::time::Duration;

fn output_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_dry_run_prints_limit_events() {
    let mut run_loop = run_loop(
        settings(5, true),
        OutputFormat::Json,
        RecordingClient::default(),
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;

    assert_eq!(metrics.iterations, 5);
    assert_eq!(metrics.inspected, 5);
    assert_eq!(metrics.published, 0);

    let lines = output_lines(run_loop.output());
    assert_eq!(lines.len(), 5);
    for line in &lines {
        let event: Event = serde_json::from_str(line).unwrap();
        assert!((0.0..1.0).contains(&event.goodness()));
        assert!(event.event_type() < 4);
    }
    assert!(run_loop.publisher().client().sent().is_empty());
}

#[tokio::test]
async fn test_dry_run_avro_prints_decoded_events() {
    let mut run_loop = run_loop(
        settings(5, true),
        OutputFormat::Avro,
        RecordingClient::default(),
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;
    assert_eq!(metrics.inspected, 5);
    assert!(run_loop.publisher().client().sent().is_empty());

    let mut expected = EventGenerator::new(SEED);
    for line in output_lines(run_loop.output()) {
        let event: Event = serde_json::from_str(&line).unwrap();
        let reference = expected.generate();
        assert_eq!(event.goodness(), reference.goodness());
        assert_eq!(event.event_type(), reference.event_type());
    }
}

#[tokio::test]
async fn test_dry_run_waits_between_events() {
    let mut settings = settings(3, true);
    settings.wait_time = Duration::from_millis(20);

    let mut run_loop = run_loop(
        settings,
        OutputFormat::Json,
        RecordingClient::default(),
        Duration::from_millis(500),
    );

    let metrics = run_loop.run().await;
    assert_eq!(metrics.iterations, 3);
    assert!(metrics.total_duration >= Duration::from_millis(60));
}
