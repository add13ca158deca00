//! datagen library
//!
//! A synthetic event generator: fabricates randomized events at a fixed
//! cadence and publishes them to a Kafka topic, or prints them locally for
//! inspection. Its purpose is to feed downstream consumers with
//! realistic-shaped traffic without a real event source.
//!
//! # Crates
//!
//! - `datagen_event` - the [`Event`](datagen_event::Event) model and generator
//! - `datagen_encoding` - JSON and Avro binary payload encodings
//! - `datagen_kafka_producer` - bounded-wait Kafka publisher
//!
//! # CLI Usage
//!
//! ```bash
//! # Print ten JSON events locally (dry run is the default)
//! LIMIT=10 datagen
//!
//! # Print decoded Avro payloads
//! LIMIT=10 OUTPUT_FORMAT=AVRO datagen
//!
//! # Publish to Kafka every 100ms
//! DRY_RUN=false BOOTSTRAP_SERVERS=localhost:9092 TOPIC_NAME=events WAIT_TIME=100 datagen
//! ```

pub mod config;
pub mod metrics;
pub mod run;

pub use config::{Config, RunSettings};
pub use metrics::RunMetrics;
pub use run::RunLoop;
