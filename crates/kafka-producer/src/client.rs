use crate::error::{PublishError, Result};
use async_trait::async_trait;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication, TopicResult};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::time::Duration;

/// Broker coordinates of an acknowledged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub partition: i32,
    pub offset: i64,
}

/// Operations the publisher needs from a message broker.
///
/// `send` resolves once the broker acknowledges (or rejects) the record.
/// Implementations must not retry.
#[async_trait]
pub trait BrokerClient: Send + Sync {
    /// Send one unkeyed record carrying `payload` to `topic`.
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<Delivery>;

    /// Flush outstanding records, waiting at most `timeout`.
    fn close(&self, timeout: Duration) -> Result<()>;
}

/// Connection settings for [`KafkaClient`].
#[derive(Debug, Clone)]
pub struct ProducerSettings {
    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    pub bootstrap_servers: String,
    /// Client id reported to the brokers
    pub client_id: String,
    /// Upper bound for a single delivery
    pub timeout: Duration,
}

impl Default for ProducerSettings {
    fn default() -> Self {
        Self {
            bootstrap_servers: "localhost:9092".to_string(),
            client_id: "datagen".to_string(),
            timeout: crate::publisher::DEFAULT_ACK_TIMEOUT,
        }
    }
}

/// rdkafka-backed [`BrokerClient`].
pub struct KafkaClient {
    producer: FutureProducer,
    bootstrap_servers: String,
    timeout: Duration,
}

impl KafkaClient {
    /// Create a producer. No connection is made until the first send.
    pub fn new(settings: &ProducerSettings) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &settings.bootstrap_servers)
            .set("client.id", &settings.client_id)
            .set(
                "message.timeout.ms",
                settings.timeout.as_millis().to_string(),
            )
            .create()?;

        Ok(Self {
            producer,
            bootstrap_servers: settings.bootstrap_servers.clone(),
            timeout: settings.timeout,
        })
    }

    /// Create Kafka topic if it doesn't exist
    pub async fn create_topic_if_not_exists(&self, topic: &str, partitions: i32) -> Result<()> {
        let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", &self.bootstrap_servers)
            .create()?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(5)));

        let results = admin_client
            .create_topics(&[new_topic], &opts)
            .await
            .map_err(|e| PublishError::TopicCreation(format!("Failed to create topics: {e}")))?;

        for result in results {
            check_topic_result(result)?;
        }

        Ok(())
    }
}

/// Accept a created or already existing topic; anything else is an error.
fn check_topic_result(result: TopicResult) -> Result<()> {
    match result {
        Ok(topic_name) => {
            tracing::info!("Topic '{topic_name}' created successfully");
            Ok(())
        }
        Err((topic_name, RDKafkaErrorCode::TopicAlreadyExists)) => {
            tracing::info!("Topic '{topic_name}' already exists");
            Ok(())
        }
        Err((topic_name, err)) => Err(PublishError::TopicCreation(format!(
            "Failed to create topic {topic_name}: {err}"
        ))),
    }
}

#[async_trait]
impl BrokerClient for KafkaClient {
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<Delivery> {
        let record = FutureRecord::<(), [u8]>::to(topic).payload(payload);

        let (partition, offset) = self
            .producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map_err(|(err, _)| err)?;

        Ok(Delivery { partition, offset })
    }

    fn close(&self, timeout: Duration) -> Result<()> {
        self.producer.flush(Timeout::After(timeout))?;
        Ok(())
    }
}
