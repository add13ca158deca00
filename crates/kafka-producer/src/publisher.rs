//! Bounded-wait publishing of encoded payloads.

use crate::client::{BrokerClient, Delivery};
use crate::error::{PublishError, Result};
use std::time::Duration;

/// Default time to wait for a delivery acknowledgment.
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_millis(500);

/// Sends payloads through a [`BrokerClient`] and waits for each acknowledgment.
///
/// Every call makes exactly one send attempt. If no acknowledgment arrives
/// within the timeout the attempt is abandoned and reported as
/// [`PublishError::Timeout`].
pub struct Publisher<C> {
    client: C,
    timeout: Duration,
}

impl<C: BrokerClient> Publisher<C> {
    pub fn new(client: C, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Publish `payload` to `topic` as an unkeyed record.
    pub async fn publish(&self, topic: &str, payload: &[u8]) -> Result<Delivery> {
        let delivery = tokio::time::timeout(self.timeout, self.client.send(topic, payload))
            .await
            .map_err(|_| PublishError::Timeout(self.timeout))??;

        tracing::debug!(
            "Published {} bytes to '{}' (partition {}, offset {})",
            payload.len(),
            topic,
            delivery.partition,
            delivery.offset
        );
        Ok(delivery)
    }

    /// Flush the client, waiting at most the acknowledgment timeout.
    pub fn close(&self) -> Result<()> {
        self.client.close(self.timeout)
    }
}
