use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinSet};
use tracing::Instrument;
use vkit_shared::contact::{FieldRole, SubmissionRecord};

use crate::{
    Acknowledgement, ContactInput, Document, FieldSpec, FormBinding, FormSurface, NoopHook,
    NotificationHook, OverlayPhase, OverlayTarget, SimulatedTransport, SubmitTransport,
    SuccessOverlay, blur_error, memory::DEFAULT_SUBMIT_LABEL,
};

pub const DEFAULT_CLOSE_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// No form was bound; nothing happened.
    Inert,
    /// A submission is already in flight on this form.
    Busy,
    Invalid,
    Succeeded(SubmissionRecord),
    Failed(vkit_shared::Error),
}

impl SubmitOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

/// Events a host routes from its form to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Blur(FieldRole),
    Submit,
    OverlayClick(OverlayTarget),
}

/// User-facing strings the controller writes onto the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub submit_label: String,
    pub busy_label: String,
    pub failure_notice: String,
    pub acknowledgement: Acknowledgement,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            submit_label: DEFAULT_SUBMIT_LABEL.to_owned(),
            busy_label: "Sending...".to_owned(),
            failure_notice: "Sorry, there was an error sending your message. Please try again or contact us directly.".to_owned(),
            acknowledgement: Acknowledgement::default(),
        }
    }
}

struct Bound<S> {
    surface: S,
    fields: Vec<FieldSpec>,
    phase: SubmissionPhase,
    settled: Option<SubmissionPhase>,
}

impl<S: FormSurface> Bound<S> {
    fn spec(&self, role: FieldRole) -> Option<FieldSpec> {
        self.fields.iter().find(|spec| spec.role == role).copied()
    }

    fn transition(&mut self, phase: SubmissionPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "Submission phase");
        self.phase = phase;
        if matches!(
            phase,
            SubmissionPhase::Invalid | SubmissionPhase::Succeeded | SubmissionPhase::Failed
        ) {
            self.settled = Some(phase);
        }
    }

    fn validate_all(&mut self) -> bool {
        for spec in &self.fields {
            self.surface.clear_error(spec.role);
        }

        let mut input = ContactInput::default();
        for spec in &self.fields {
            let value = self.surface.value(spec.role);
            input.set(
                spec.role,
                (spec.required || !value.is_empty()).then_some(value),
            );
        }

        let failing = input.failing_roles();
        for role in &failing {
            self.surface.show_error(*role, role.submit_message());
        }

        failing.is_empty()
    }

    fn collect(&self) -> vkit_shared::Result<SubmissionRecord> {
        SubmissionRecord::stamped(
            self.surface.value(FieldRole::Name),
            self.surface.value(FieldRole::Email),
            self.surface.value(FieldRole::Phone),
            self.surface.service(),
            self.surface.value(FieldRole::Message),
        )
    }
}

/// Drives validation, error feedback and the submit lifecycle of one form.
///
/// When the form is absent, or lacks a required field, the controller is
/// inert and every entry point does nothing. Notification hooks run in the
/// background; dropping the controller aborts any that are still pending.
pub struct ContactFormController<S: FormSurface> {
    binding: FormBinding,
    bound: Option<Mutex<Bound<S>>>,
    copy: FormCopy,
    transport: Arc<dyn SubmitTransport>,
    hook: Arc<dyn NotificationHook>,
    notifications: Mutex<JoinSet<()>>,
    close_transition: Duration,
}

impl<S: FormSurface> ContactFormController<S> {
    pub fn bind<D>(document: &mut D, binding: FormBinding) -> Self
    where
        D: Document<Form = S>,
    {
        let bound = match document.form(&binding.form_id) {
            None => {
                tracing::debug!(form_id = %binding.form_id, "Form not found, controller left inert");
                None
            }
            Some(surface) => match binding.resolve(&surface) {
                Ok(fields) => Some(Mutex::new(Bound {
                    surface,
                    fields,
                    phase: SubmissionPhase::Idle,
                    settled: None,
                })),
                Err(role) => {
                    tracing::warn!(
                        form_id = %binding.form_id,
                        field = %role,
                        "Required field missing, controller left inert"
                    );
                    None
                }
            },
        };

        Self {
            binding,
            bound,
            copy: FormCopy::default(),
            transport: Arc::new(SimulatedTransport::default()),
            hook: Arc::new(NoopHook),
            notifications: Mutex::new(JoinSet::new()),
            close_transition: DEFAULT_CLOSE_TRANSITION,
        }
    }

    pub fn transport(mut self, transport: impl SubmitTransport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn hook(mut self, hook: impl NotificationHook + 'static) -> Self {
        self.hook = Arc::new(hook);
        self
    }

    pub fn copy(mut self, copy: FormCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn close_transition(mut self, duration: Duration) -> Self {
        self.close_transition = duration;
        self
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn binding(&self) -> &FormBinding {
        &self.binding
    }

    /// Current phase. Seen from outside a call this is `Idle` or `Submitting`,
    /// the terminal phases are reported by [`Self::settled`].
    pub async fn phase(&self) -> Option<SubmissionPhase> {
        match &self.bound {
            Some(bound) => Some(bound.lock().await.phase),
            None => None,
        }
    }

    /// How the most recent submission ended: `Invalid`, `Succeeded` or `Failed`.
    /// `None` before the first attempt and on an inert controller.
    pub async fn settled(&self) -> Option<SubmissionPhase> {
        match &self.bound {
            Some(bound) => bound.lock().await.settled,
            None => None,
        }
    }

    /// Waits for every notification hook started by a successful submit.
    pub async fn flush_notifications(&self) {
        let mut notifications = self.notifications.lock().await;
        while notifications.join_next().await.is_some() {}
    }

    /// Runs `f` against the bound form.
    pub async fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        match &self.bound {
            Some(bound) => Some(f(&bound.lock().await.surface)),
            None => None,
        }
    }

    /// Mutable access to the bound form, as the host does when the user types.
    pub async fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        match &self.bound {
            Some(bound) => Some(f(&mut bound.lock().await.surface)),
            None => None,
        }
    }

    pub async fn dispatch(&self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Blur(role) => {
                self.blur(role).await;
                None
            }
            FormEvent::Submit => Some(self.submit().await),
            FormEvent::OverlayClick(target) => {
                self.click_overlay(target).await;
                None
            }
        }
    }

    /// Field lost focus: show or clear its error.
    pub async fn blur(&self, role: FieldRole) {
        let Some(bound) = &self.bound else {
            return;
        };
        let mut bound = bound.lock().await;
        let Some(spec) = bound.spec(role) else {
            return;
        };

        let value = bound.surface.value(role);
        match blur_error(spec, &value) {
            Some(message) => bound.surface.show_error(role, message),
            None => bound.surface.clear_error(role),
        }
    }

    /// Clears every error, then revalidates every bound field.
    pub async fn validate_form(&self) -> bool {
        let Some(bound) = &self.bound else {
            return false;
        };

        bound.lock().await.validate_all()
    }

    #[tracing::instrument(skip(self), fields(form_id = %self.binding.form_id))]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(bound) = &self.bound else {
            return SubmitOutcome::Inert;
        };

        let record = {
            let mut bound = bound.lock().await;
            if bound.phase != SubmissionPhase::Idle || !bound.surface.submit_enabled() {
                tracing::debug!("Submission already in flight");
                return SubmitOutcome::Busy;
            }

            bound.transition(SubmissionPhase::Validating);
            if !bound.validate_all() {
                bound.transition(SubmissionPhase::Invalid);
                bound.transition(SubmissionPhase::Idle);
                return SubmitOutcome::Invalid;
            }

            bound.transition(SubmissionPhase::Submitting);
            bound
                .surface
                .set_submit_control(false, &self.copy.busy_label);

            match bound.collect() {
                Ok(record) => record,
                Err(err) => {
                    self.fail(&mut bound, &err);
                    return SubmitOutcome::Failed(err);
                }
            }
        };

        let result = self.transport.submit(&record).await;

        {
            let mut bound = bound.lock().await;
            if let Err(err) = result {
                self.fail(&mut bound, &err);
                return SubmitOutcome::Failed(err);
            }

            tracing::info!(
                name = %record.name,
                email = %record.email,
                service = %record.service,
                timestamp = %record.timestamp,
                "Form submitted"
            );

            bound.transition(SubmissionPhase::Succeeded);
            bound
                .surface
                .set_submit_control(true, &self.copy.submit_label);
            bound
                .surface
                .open_overlay(SuccessOverlay::new(self.copy.acknowledgement.clone()));
            bound.surface.reset();
            bound.transition(SubmissionPhase::Idle);
        }

        self.spawn_notification(record.clone()).await;

        SubmitOutcome::Succeeded(record)
    }

    async fn spawn_notification(&self, record: SubmissionRecord) {
        let hook = Arc::clone(&self.hook);
        let mut notifications = self.notifications.lock().await;
        while notifications.try_join_next().is_some() {}

        notifications.spawn(async move {
            if let Err(err) = hook.notify(&record).await {
                tracing::error!(error = %err, email = %record.email, "Notification hook failed");
            }
        }
        .in_current_span());
    }

    fn fail(&self, bound: &mut Bound<S>, err: &vkit_shared::Error) {
        tracing::error!(error = %err, "Error submitting form");

        bound.transition(SubmissionPhase::Failed);
        bound
            .surface
            .set_submit_control(true, &self.copy.submit_label);
        bound.surface.notify_failure(&self.copy.failure_notice);
        bound.transition(SubmissionPhase::Idle);
    }

    /// Click on the success overlay. Returns whether it was dismissed.
    pub async fn click_overlay(&self, target: OverlayTarget) -> bool {
        let Some(bound) = &self.bound else {
            return false;
        };

        {
            let mut bound = bound.lock().await;
            let Some(overlay) = bound.surface.overlay_mut() else {
                return false;
            };
            if !overlay.click(target) {
                return false;
            }
        }

        tokio::time::sleep(self.close_transition).await;

        let mut bound = bound.lock().await;
        let closing = bound
            .surface
            .overlay_mut()
            .is_some_and(|overlay| overlay.phase() == OverlayPhase::Closing);
        if closing {
            bound.surface.remove_overlay();
        }

        true
    }
}
