//! The generator run loop.
//!
//! Each iteration generates one event, encodes it, then either prints a
//! readable rendering of the payload (dry run) or publishes it and waits for
//! the acknowledgment, and finally sleeps for the configured delay. Only one
//! event is ever in flight.
//!
//! No per-iteration failure stops the loop: encode, inspection and delivery
//! failures are logged, counted in [`RunMetrics`], and the next iteration
//! starts as usual.

use crate::config::RunSettings;
use crate::metrics::RunMetrics;
use datagen_encoding::{EventEncoder, OutputFormat};
use datagen_event::EventGenerator;
use datagen_kafka_producer::{BrokerClient, Publisher};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, error, info};

/// Drives generation, encoding and delivery until the iteration limit.
pub struct RunLoop<C, W> {
    generator: EventGenerator,
    encoder: EventEncoder,
    sink: EventSink<C, W>,
}

/// Where encoded payloads go: the inspection output or the publisher.
struct EventSink<C, W> {
    settings: RunSettings,
    publisher: Publisher<C>,
    output: W,
}

impl<C: BrokerClient, W: Write> RunLoop<C, W> {
    /// Create a run loop.
    ///
    /// `output` receives one line per event during a dry run and is unused
    /// otherwise.
    pub fn new(
        settings: RunSettings,
        generator: EventGenerator,
        encoder: EventEncoder,
        publisher: Publisher<C>,
        output: W,
    ) -> Self {
        Self {
            generator,
            encoder,
            sink: EventSink {
                settings,
                publisher,
                output,
            },
        }
    }

    pub fn publisher(&self) -> &Publisher<C> {
        &self.sink.publisher
    }

    pub fn output(&self) -> &W {
        &self.sink.output
    }

    /// Run until `limit` iterations have completed, or forever without one.
    pub async fn run(&mut self) -> RunMetrics {
        let start_time = Instant::now();
        let mut metrics = RunMetrics::default();
        let settings = &self.sink.settings;

        info!(
            "Generating {} events as {} ({}, {:?} between events)",
            settings
                .limit
                .map_or_else(|| "unbounded".to_string(), |limit| limit.to_string()),
            self.encoder.format(),
            if settings.dry_run {
                "dry run".to_string()
            } else {
                format!(
                    "topic '{}', {:?} ack timeout",
                    settings.topic,
                    self.sink.publisher.timeout()
                )
            },
            settings.wait_time
        );

        while self
            .sink
            .settings
            .limit
            .map_or(true, |limit| metrics.iterations < limit)
        {
            self.iterate(metrics.iterations, &mut metrics).await;
            metrics.iterations += 1;

            tokio::time::sleep(self.sink.settings.wait_time).await;
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Run complete: {} events in {:?} ({:.2} events/sec), {} published, {} publish failures, {} encode failures",
            self.generator.generated(),
            metrics.total_duration,
            metrics.events_per_second(),
            metrics.published,
            metrics.publish_failures,
            metrics.encode_failures
        );

        metrics
    }

    async fn iterate(&mut self, iteration: u64, metrics: &mut RunMetrics) {
        let event = self.generator.generate();
        let format = self.encoder.format();

        let payload = payload_or_empty(self.encoder.encode(&event), iteration, format, metrics);
        self.sink.emit(iteration, format, payload, metrics).await;
    }
}

impl<C: BrokerClient, W: Write> EventSink<C, W> {
    async fn emit(
        &mut self,
        iteration: u64,
        format: OutputFormat,
        payload: &[u8],
        metrics: &mut RunMetrics,
    ) {
        if self.settings.dry_run {
            match inspect_line(format, payload, &mut self.output) {
                Ok(()) => metrics.inspected += 1,
                Err(e) => {
                    error!("Failed to print event {iteration}: {e}");
                    metrics.inspect_failures += 1;
                }
            }
            return;
        }

        match self.publisher.publish(&self.settings.topic, payload).await {
            Ok(delivery) => {
                debug!(
                    "Event {} delivered to partition {} at offset {}",
                    iteration, delivery.partition, delivery.offset
                );
                metrics.published += 1;
            }
            Err(e) => {
                error!(
                    "Failed to publish event {} to topic '{}' ({} bytes): {}",
                    iteration,
                    self.settings.topic,
                    payload.len(),
                    e
                );
                metrics.publish_failures += 1;
            }
        }
    }
}

/// Unwrap an encoder result, falling back to an empty payload on failure.
///
/// The empty payload is still printed or published.
fn payload_or_empty<'a>(
    encoded: datagen_encoding::Result<&'a [u8]>,
    iteration: u64,
    format: OutputFormat,
    metrics: &mut RunMetrics,
) -> &'a [u8] {
    match encoded {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to encode event {iteration} as {format}: {e}");
            metrics.encode_failures += 1;
            &[]
        }
    }
}

fn inspect_line<W: Write>(
    format: OutputFormat,
    payload: &[u8],
    output: &mut W,
) -> anyhow::Result<()> {
    let line = format.inspect(payload)?;
    writeln!(output, "{line}")?;
    Ok(())
}
