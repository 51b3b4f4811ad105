use vkit_shared::contact::FieldRole;

use crate::SuccessOverlay;

/// Host environment holding the forms a controller can bind to.
pub trait Document {
    type Form: FormSurface;

    /// Hands over the form with the given identifier, if the document has one.
    fn form(&mut self, id: &str) -> Option<Self::Form>;
}

/// The interface elements of one bound form.
///
/// Implemented by the host UI; the controller only ever talks to its own
/// form through this trait.
pub trait FormSurface: Send {
    fn has_field(&self, role: FieldRole) -> bool;

    /// Current value of the field, empty when the field is absent.
    fn value(&self, role: FieldRole) -> String;

    /// Current value of the service selection.
    fn service(&self) -> String;

    /// Attaches `message` to the field's group, replacing any existing one,
    /// and marks the field invalid.
    fn show_error(&mut self, role: FieldRole, message: &str);

    /// Removes the field's error message and restores its default state.
    fn clear_error(&mut self, role: FieldRole);

    fn submit_enabled(&self) -> bool;

    fn set_submit_control(&mut self, enabled: bool, label: &str);

    fn open_overlay(&mut self, overlay: SuccessOverlay);

    fn overlay_mut(&mut self) -> Option<&mut SuccessOverlay>;

    fn remove_overlay(&mut self);

    /// Blocking notice shown when a submission could not be delivered.
    fn notify_failure(&mut self, notice: &str);

    /// Clears every field value back to empty.
    fn reset(&mut self);
}
