use vkit_contact::NotificationHook;
use vkit_shared::contact::SubmissionRecord;

use crate::{EmailConfig, EmailService};

pub const CONTACT_SUBJECT: &str = "New message from contact page";

/// Mails every submitted contact request to the configured inbox.
#[derive(Clone)]
pub struct EmailNotifier {
    service: EmailService,
    to: String,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: EmailService::new(config)?,
            to: config.contact_address.to_owned(),
        })
    }
}

pub fn contact_body(record: &SubmissionRecord) -> String {
    format!(
        r#"
Email: {}
Name: {}
Phone: {}
Service: {}
Message: {}
Submitted at: {}
            "#,
        record.email, record.name, record.phone, record.service, record.message, record.timestamp
    )
}

#[async_trait::async_trait]
impl NotificationHook for EmailNotifier {
    async fn notify(&self, record: &SubmissionRecord) -> vkit_shared::Result<()> {
        self.service
            .send_plain(&self.to, CONTACT_SUBJECT, contact_body(record))
            .await
            .map_err(|err| vkit_shared::Error::Notification(err.to_string()))
    }
}
