use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use vkit_contact::{
    ContactFormController, FieldRole, FormBinding, MemoryDocument, MemoryForm, NotificationHook,
    SimulatedTransport, SubmissionRecord, SubmitTransport,
};

#[allow(dead_code)]
pub fn valid_form() -> MemoryForm {
    MemoryForm::contact()
        .with_value(FieldRole::Name, "Ravi Kumar")
        .with_value(FieldRole::Email, "ravi@example.in")
        .with_value(FieldRole::Phone, "98765 43210")
        .with_value(FieldRole::Message, "Looking for a website redesign quote.")
        .with_service("web-development")
}

#[allow(dead_code)]
pub fn bind(form: MemoryForm) -> ContactFormController<MemoryForm> {
    let mut document = MemoryDocument::new().with_form("contactForm", form);

    ContactFormController::bind(&mut document, FormBinding::default())
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CountingTransport {
    pub calls: Arc<AtomicUsize>,
    inner: SimulatedTransport,
}

#[allow(dead_code)]
impl CountingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SubmitTransport for CountingTransport {
    async fn submit(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.submit(record).await
    }
}

#[allow(dead_code)]
pub struct FailingTransport;

#[async_trait::async_trait]
impl SubmitTransport for FailingTransport {
    async fn submit(&self, _record: &SubmissionRecord) -> vkit_shared::Result<()> {
        vkit_shared::transport!("backend unreachable");
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingHook {
    pub records: Arc<std::sync::Mutex<Vec<SubmissionRecord>>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl RecordingHook {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationHook for RecordingHook {
    async fn notify(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        if self.fail {
            return Err(vkit_shared::Error::Notification("mail relay down".to_owned()));
        }

        Ok(())
    }
}

/// Hook that takes `delay` before recording the submission.
#[allow(dead_code)]
#[derive(Clone)]
pub struct SlowHook {
    pub delay: Duration,
    pub inner: RecordingHook,
}

#[allow(dead_code)]
impl SlowHook {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: RecordingHook::default(),
        }
    }
}

#[async_trait::async_trait]
impl NotificationHook for SlowHook {
    async fn notify(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.notify(record).await
    }
}
