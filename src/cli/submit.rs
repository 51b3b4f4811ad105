use std::fmt;

use anyhow::Result;
use vkit_contact::{
    Acknowledgement, ContactFormController, FieldRole, FormEvent, MemoryDocument, MemoryForm,
    SubmitOutcome,
};
use vkit_notification::EmailNotifier;

use crate::config::Config;

#[derive(Debug, Clone, Default)]
pub struct SubmitInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    pub errors: Vec<(FieldRole, String)>,
    pub acknowledgement: Option<Acknowledgement>,
    pub notices: Vec<String>,
}

impl SubmitReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_succeeded()
    }
}

impl fmt::Display for SubmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (role, message) in &self.errors {
            writeln!(f, "{role}: {message}")?;
        }
        for notice in &self.notices {
            writeln!(f, "{notice}")?;
        }
        if let Some(ack) = &self.acknowledgement {
            writeln!(f, "{}", ack.title)?;
            writeln!(f, "{}", ack.body)?;
        }
        if let SubmitOutcome::Inert = self.outcome {
            writeln!(f, "form is not bound, nothing submitted")?;
        }

        Ok(())
    }
}

/// Fills a headless contact form, tabs through every field, then submits it.
#[tracing::instrument(skip_all)]
pub async fn submit(config: &Config, input: SubmitInput) -> Result<SubmitReport> {
    let form = MemoryForm::contact()
        .with_value(FieldRole::Name, input.name)
        .with_value(FieldRole::Email, input.email)
        .with_value(FieldRole::Phone, input.phone)
        .with_value(FieldRole::Message, input.message)
        .with_service(input.service);
    let mut document = MemoryDocument::new().with_form(&config.form.form_id, form);

    let controller = ContactFormController::bind(&mut document, config.form.binding())
        .transport(config.form.transport())
        .close_transition(config.form.close_transition());
    let controller = if config.email.enabled {
        controller.hook(EmailNotifier::new(&config.email.smtp())?)
    } else {
        controller
    };

    for role in [
        FieldRole::Name,
        FieldRole::Email,
        FieldRole::Phone,
        FieldRole::Message,
    ] {
        controller.dispatch(FormEvent::Blur(role)).await;
    }

    let outcome = controller.submit().await;
    controller.flush_notifications().await;

    let report = controller
        .inspect(|form| SubmitReport {
            outcome: SubmitOutcome::Inert,
            errors: form
                .errors()
                .into_iter()
                .map(|(role, message)| (role, message.to_owned()))
                .collect(),
            acknowledgement: form.overlay().map(|overlay| overlay.acknowledgement().clone()),
            notices: form.notices().to_vec(),
        })
        .await
        .unwrap_or(SubmitReport {
            outcome: SubmitOutcome::Inert,
            errors: Vec::new(),
            acknowledgement: None,
            notices: Vec::new(),
        });

    Ok(SubmitReport { outcome, ..report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmailConfig, FormConfig, ObservabilityConfig};

    fn config() -> Config {
        Config {
            form: FormConfig::default(),
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    fn input() -> SubmitInput {
        SubmitInput {
            name: "Ravi Kumar".to_owned(),
            email: "ravi@example.in".to_owned(),
            phone: "9876543210".to_owned(),
            service: "seo".to_owned(),
            message: "Please send me your pricing.".to_owned(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_valid_input() -> anyhow::Result<()> {
        let report = submit(&config(), input()).await?;

        assert!(report.is_success());
        assert!(report.errors.is_empty());
        assert!(report.to_string().contains("Message Sent Successfully!"));

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_reports_field_errors() -> anyhow::Result<()> {
        let report = submit(
            &config(),
            SubmitInput {
                email: "ravi@example".to_owned(),
                message: "hi".to_owned(),
                ..input()
            },
        )
        .await?;

        assert!(!report.is_success());
        assert!(report.acknowledgement.is_none());
        assert_eq!(
            report.to_string(),
            "email: Please enter a valid email address\nmessage: Message must be at least 10 characters long\n"
        );

        Ok(())
    }
}
