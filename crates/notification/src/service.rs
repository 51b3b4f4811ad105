//! Plain-text mail delivery over SMTP

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

/// SMTP relay and the two addresses a contact notification travels between.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    pub contact_address: String,
}

impl EmailConfig {
    /// Relay login, `None` unless both username and password are set.
    pub fn credentials(&self) -> Option<Credentials> {
        (!self.smtp_username.is_empty() && !self.smtp_password.is_empty())
            .then(|| Credentials::new(self.smtp_username.clone(), self.smtp_password.clone()))
    }

    fn mailer(&self) -> anyhow::Result<SmtpTransport> {
        let builder = match self.credentials() {
            Some(credentials) => SmtpTransport::relay(&self.smtp_host)?.credentials(credentials),
            // local catchers such as MailDev accept plain unauthenticated SMTP
            None => SmtpTransport::builder_dangerous(&self.smtp_host),
        };

        Ok(builder.port(self.smtp_port).build())
    }
}

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    sender: Mailbox,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let sender = config.from_address.parse()?;
        let mailer = config.mailer()?;

        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            authenticated = config.credentials().is_some(),
            "SMTP mailer ready"
        );

        Ok(Self { mailer, sender })
    }

    pub fn build_plain(
        &self,
        to: &str,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<Message> {
        Ok(Message::builder()
            .from(self.sender.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain.into())?)
    }

    /// Delivers on the blocking pool so the SMTP dialogue never stalls the runtime.
    #[tracing::instrument(skip_all, fields(to = tracing::field::Empty, subject = tracing::field::Empty))]
    pub async fn send_plain(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<()> {
        let to = to.into();
        let subject = subject.into();

        tracing::Span::current()
            .record("to", to.as_str())
            .record("subject", subject.as_str());

        let message = self.build_plain(&to, subject, plain)?;
        let mailer = self.mailer.clone();
        let response = tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        tracing::debug!(code = %response.code(), "Mail accepted by relay");

        Ok(())
    }
}
