//! Headless form used by the CLI and tests.

use std::collections::{BTreeMap, HashMap};

use vkit_shared::contact::FieldRole;

use crate::{Document, FormSurface, SuccessOverlay};

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub value: String,
    pub error: Option<String>,
    pub invalid: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryForm {
    fields: BTreeMap<FieldRole, MemoryField>,
    service: String,
    submit_enabled: bool,
    submit_label: String,
    control_history: Vec<(bool, String)>,
    overlay: Option<SuccessOverlay>,
    notices: Vec<String>,
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryForm {
    /// A form with no fields and an enabled submit control.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            service: String::new(),
            submit_enabled: true,
            submit_label: DEFAULT_SUBMIT_LABEL.to_owned(),
            control_history: Vec::new(),
            overlay: None,
            notices: Vec::new(),
        }
    }

    /// A form carrying all four contact fields.
    pub fn contact() -> Self {
        Self::new()
            .with_field(FieldRole::Name)
            .with_field(FieldRole::Email)
            .with_field(FieldRole::Phone)
            .with_field(FieldRole::Message)
    }

    pub fn with_field(mut self, role: FieldRole) -> Self {
        self.fields.entry(role).or_default();
        self
    }

    pub fn with_value(mut self, role: FieldRole, value: impl Into<String>) -> Self {
        self.set_value(role, value);
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Types into a bound field. Absent fields are left absent.
    pub fn set_value(&mut self, role: FieldRole, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(&role) {
            field.value = value.into();
        }
    }

    pub fn field(&self, role: FieldRole) -> Option<&MemoryField> {
        self.fields.get(&role)
    }

    pub fn error(&self, role: FieldRole) -> Option<&str> {
        self.fields.get(&role).and_then(|field| field.error.as_deref())
    }

    pub fn errors(&self) -> Vec<(FieldRole, &str)> {
        self.fields
            .iter()
            .filter_map(|(role, field)| field.error.as_deref().map(|error| (*role, error)))
            .collect()
    }

    pub fn service_value(&self) -> &str {
        &self.service
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Every `(enabled, label)` state the submit control went through.
    pub fn control_history(&self) -> &[(bool, String)] {
        &self.control_history
    }

    pub fn overlay(&self) -> Option<&SuccessOverlay> {
        self.overlay.as_ref()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl FormSurface for MemoryForm {
    fn has_field(&self, role: FieldRole) -> bool {
        self.fields.contains_key(&role)
    }

    fn value(&self, role: FieldRole) -> String {
        self.fields
            .get(&role)
            .map(|field| field.value.to_owned())
            .unwrap_or_default()
    }

    fn service(&self) -> String {
        self.service.to_owned()
    }

    fn show_error(&mut self, role: FieldRole, message: &str) {
        if let Some(field) = self.fields.get_mut(&role) {
            field.error = Some(message.to_owned());
            field.invalid = true;
        }
    }

    fn clear_error(&mut self, role: FieldRole) {
        if let Some(field) = self.fields.get_mut(&role) {
            field.error = None;
            field.invalid = false;
        }
    }

    fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_owned();
        self.control_history.push((enabled, label.to_owned()));
    }

    fn open_overlay(&mut self, overlay: SuccessOverlay) {
        self.overlay = Some(overlay);
    }

    fn overlay_mut(&mut self) -> Option<&mut SuccessOverlay> {
        self.overlay.as_mut()
    }

    fn remove_overlay(&mut self) {
        self.overlay = None;
    }

    fn notify_failure(&mut self, notice: &str) {
        self.notices.push(notice.to_owned());
    }

    fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value.clear();
        }
        self.service.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    forms: HashMap<String, MemoryForm>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, id: impl Into<String>, form: MemoryForm) -> Self {
        self.forms.insert(id.into(), form);
        self
    }
}

impl Document for MemoryDocument {
    type Form = MemoryForm;

    fn form(&mut self, id: &str) -> Option<MemoryForm> {
        self.forms.remove(id)
    }
}
