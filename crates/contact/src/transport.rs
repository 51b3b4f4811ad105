use std::time::Duration;

use vkit_shared::contact::SubmissionRecord;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Delivers a submission to wherever contact requests end up.
#[async_trait::async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> vkit_shared::Result<()>;
}

/// Stands in for a backend: waits a fixed delay, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn submit(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        let payload = record.to_json()?;
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, %payload, "Simulating submission");
        tokio::time::sleep(self.delay).await;

        Ok(())
    }
}
