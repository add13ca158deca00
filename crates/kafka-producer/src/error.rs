use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("No delivery acknowledgment within {0:?}")]
    Timeout(Duration),

    #[error("Topic creation error: {0}")]
    TopicCreation(String),
}

pub type Result<T> = std::result::Result<T, PublishError>;
