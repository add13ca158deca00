//! Environment-driven configuration.
//!
//! Every option is a long flag with an environment-variable fallback, so the
//! binary runs with no arguments and is configured entirely through its
//! environment. Parsing happens once at startup; a malformed value aborts the
//! process before anything is generated.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use datagen_encoding::OutputFormat;
use datagen_kafka_producer::ProducerSettings;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "datagen")]
#[command(about = "Generate synthetic events and publish them to Kafka")]
#[command(long_about = None)]
pub struct Config {
    /// Delay between events in milliseconds
    #[arg(long, env = "WAIT_TIME", default_value_t = 250)]
    pub wait_time: u64,

    /// Number of events to generate (unbounded when unset)
    #[arg(long, env = "LIMIT")]
    pub limit: Option<u64>,

    /// Print events to stdout instead of publishing them
    #[arg(
        long,
        env = "DRY_RUN",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Kafka topic to publish to
    #[arg(long, env = "TOPIC_NAME", default_value = "datagen")]
    pub topic_name: String,

    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "BOOTSTRAP_SERVERS", default_value = "localhost:9092")]
    pub bootstrap_servers: String,

    /// Client id reported to the Kafka brokers
    #[arg(long, env = "CLIENT_ID", default_value = "datagen")]
    pub client_id: String,

    /// Time to wait for a delivery acknowledgment, in milliseconds
    #[arg(
        long,
        env = "KAFKA_TIMEOUT_MILLIS",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub kafka_timeout_millis: u64,

    /// Payload encoding
    #[arg(
        long,
        env = "OUTPUT_FORMAT",
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Json
    )]
    pub output_format: OutputFormat,

    /// Random seed for reproducible goodness/type sequences
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Create the topic before publishing if it does not exist
    #[arg(
        long,
        env = "CREATE_TOPIC",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub create_topic: bool,

    /// Partition count used when creating the topic
    #[arg(long, env = "TOPIC_PARTITIONS", default_value_t = 3)]
    pub topic_partitions: i32,
}

/// Settings consumed by the run loop.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub topic: String,
    pub wait_time: Duration,
    pub limit: Option<u64>,
    pub dry_run: bool,
}

impl Config {
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            topic: self.topic_name.clone(),
            wait_time: Duration::from_millis(self.wait_time),
            limit: self.limit,
            dry_run: self.dry_run,
        }
    }

    pub fn producer_settings(&self) -> ProducerSettings {
        ProducerSettings {
            bootstrap_servers: self.bootstrap_servers.clone(),
            client_id: self.client_id.clone(),
            timeout: self.ack_timeout(),
        }
    }

    pub fn ack_timeout(&self) -> Duration {
        Duration::from_millis(self.kafka_timeout_millis)
    }
}
