#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: String,
    pub body: String,
    pub close_label: String,
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self {
            title: "Message Sent Successfully!".to_owned(),
            body: "Thank you for reaching out to VK IT Solutions. We've received your message and will get back to you within 24 hours.".to_owned(),
            close_label: "Close".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Open,
    Closing,
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    CloseButton,
    Background,
    Content,
}

/// Modal acknowledgement shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOverlay {
    acknowledgement: Acknowledgement,
    phase: OverlayPhase,
}

impl SuccessOverlay {
    pub fn new(acknowledgement: Acknowledgement) -> Self {
        Self {
            acknowledgement,
            phase: OverlayPhase::Open,
        }
    }

    pub fn acknowledgement(&self) -> &Acknowledgement {
        &self.acknowledgement
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Starts the closing transition when the click hits the close control
    /// or the background. Returns whether it did.
    pub fn click(&mut self, target: OverlayTarget) -> bool {
        match (self.phase, target) {
            (OverlayPhase::Open, OverlayTarget::CloseButton | OverlayTarget::Background) => {
                self.phase = OverlayPhase::Closing;
                true
            }
            _ => false,
        }
    }
}
