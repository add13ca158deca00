//! Command-line entry point for datagen
//!
//! Runs without arguments; every option is read from the environment (see
//! [`datagen::Config`]). Inspection lines go to stdout, logs go to stderr and
//! are filtered with `RUST_LOG`.

use anyhow::Context;
use clap::Parser;
use datagen::{Config, RunLoop};
use datagen_encoding::{EventEncoder, OutputFormat, EVENT_SCHEMA};
use datagen_event::EventGenerator;
use datagen_kafka_producer::{KafkaClient, Publisher};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    debug!("Configuration: {config:?}");

    let client = KafkaClient::new(&config.producer_settings())
        .context("Failed to create Kafka producer")?;

    if config.create_topic && !config.dry_run {
        client
            .create_topic_if_not_exists(&config.topic_name, config.topic_partitions)
            .await
            .with_context(|| format!("Failed to create topic '{}'", config.topic_name))?;
    }

    if config.output_format == OutputFormat::Avro {
        debug!("Avro schema:\n{}", EVENT_SCHEMA);
    }

    let generator = match config.seed {
        Some(seed) => EventGenerator::new(seed),
        None => EventGenerator::from_entropy(),
    };

    let mut run_loop = RunLoop::new(
        config.run_settings(),
        generator,
        EventEncoder::new(config.output_format),
        Publisher::new(client, config.ack_timeout()),
        std::io::stdout(),
    );

    let metrics = run_loop.run().await;

    if let Err(e) = run_loop.publisher().close() {
        warn!("Failed to flush Kafka producer: {e}");
    }

    info!("Generated {} events", metrics.iterations);
    Ok(())
}
