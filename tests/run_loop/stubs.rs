use async_trait::async_trait;
use datagen::{RunLoop, RunSettings};
use datagen_encoding::{EventEncoder, OutputFormat};
use datagen_event::EventGenerator;
use datagen_kafka_producer::{BrokerClient, Delivery, PublishError, Publisher};
use std::sync::Mutex;
use std::time::Duration;

pub const SEED: u64 = 42;

/// Acknowledges every record and keeps a copy of it.
#[derive(Default)]
pub struct RecordingClient {
    sent: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingClient {
    pub fn sent(&self) -> Vec<(String, Vec<u8>)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrokerClient for RecordingClient {
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<Delivery, PublishError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((topic.to_string(), payload.to_vec()));
        Ok(Delivery {
            partition: 0,
            offset: sent.len() as i64 - 1,
        })
    }

    fn close(&self, _timeout: Duration) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Accepts records but never acknowledges them.
pub struct SilentClient;

#[async_trait]
impl BrokerClient for SilentClient {
    async fn send(&self, _topic: &str, _payload: &[u8]) -> Result<Delivery, PublishError> {
        std::future::pending().await
    }

    fn close(&self, _timeout: Duration) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Fails every send immediately.
pub struct FailingClient;

#[async_trait]
impl BrokerClient for FailingClient {
    async fn send(&self, _topic: &str, _payload: &[u8]) -> Result<Delivery, PublishError> {
        Err(PublishError::Timeout(Duration::ZERO))
    }

    fn close(&self, _timeout: Duration) -> Result<(), PublishError> {
        Ok(())
    }
}

pub fn settings(limit: u64, dry_run: bool) -> RunSettings {
    RunSettings {
        topic: "datagen-test".to_string(),
        wait_time: Duration::ZERO,
        limit: Some(limit),
        dry_run,
    }
}

pub fn run_loop<C: BrokerClient>(
    settings: RunSettings,
    format: OutputFormat,
    client: C,
    ack_timeout: Duration,
) -> RunLoop<C, Vec<u8>> {
    RunLoop::new(
        settings,
        EventGenerator::new(SEED),
        EventEncoder::new(format),
        Publisher::new(client, ack_timeout),
        Vec::new(),
    )
}
