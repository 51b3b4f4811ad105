use vkit_shared::contact::SubmissionRecord;

/// Called with every successfully submitted record, after the success
/// acknowledgement is already on screen. Failures are logged and dropped.
#[async_trait::async_trait]
pub trait NotificationHook: Send + Sync {
    async fn notify(&self, record: &SubmissionRecord) -> vkit_shared::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

#[async_trait::async_trait]
impl NotificationHook for NoopHook {
    async fn notify(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        tracing::debug!(email = %record.email, "No notification hook configured");

        Ok(())
    }
}
