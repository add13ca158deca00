//! Kafka publisher for datagen.
//!
//! This library delivers encoded event payloads to a Kafka topic, one record
//! at a time, and waits a bounded time for the broker to acknowledge each one.
//!
//! ## Features
//!
//! - **Broker seam**: [`BrokerClient`] abstracts the send/flush operations so the
//!   run loop can be driven against stubs
//! - **Kafka client**: [`KafkaClient`] backed by an rdkafka `FutureProducer`
//! - **Bounded acknowledgment**: [`Publisher::publish`] gives up after the
//!   configured timeout and reports it as an ordinary delivery failure
//! - **Topic management**: optional topic creation before the first send
//!
//! Delivery is best-effort and at-most-once: a failed send is reported to the
//! caller and never retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use datagen_kafka_producer::{KafkaClient, ProducerSettings, Publisher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), datagen_kafka_producer::PublishError> {
//!     let settings = ProducerSettings::default();
//!     let client = KafkaClient::new(&settings)?;
//!     client.create_topic_if_not_exists("datagen", 3).await?;
//!
//!     let publisher = Publisher::new(client, settings.timeout);
//!     let delivery = publisher.publish("datagen", br#"{"type":1}"#).await?;
//!     println!("partition={} offset={}", delivery.partition, delivery.offset);
//!
//!     publisher.close()?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod publisher;

pub use client::{BrokerClient, Delivery, KafkaClient, ProducerSettings};
pub use error::{PublishError, Result};
pub use publisher::{Publisher, DEFAULT_ACK_TIMEOUT};
