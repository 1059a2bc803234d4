//! Contact form submission flow.
//!
//! Delivery belongs entirely to the external provider; this module only
//! models the UI lifecycle of a submission: what the button and status line
//! show at each stage and whether the fields get cleared. The state machine
//! is pure so the success and failure paths are testable without a browser
//! or a provider.

/// Terminal outcome reported by the delivery provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// What the page should show after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub button_label: &'static str,
    pub button_busy: bool,
    pub status_text: &'static str,
    /// Extra class on the status line; the base class is always kept.
    pub status_class: Option<&'static str>,
    /// Only a delivered submission clears the fields, so a failed one can be
    /// retried without retyping.
    pub clear_fields: bool,
}

const LABEL_READY: &str = "Send Message";
const LABEL_SENDING: &str = "Sending...";
const MSG_SENT: &str = "Message sent successfully 🚀";
const MSG_FAILED: &str = "Failed to send message. Try again.";

#[derive(Debug, Clone)]
pub struct ContactFlow {
    state: SubmitState,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            state: SubmitState::Idle,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// A submission left the page; show the busy button and clear any
    /// previous outcome message.
    pub fn begin(&mut self) -> FormView {
        self.state = SubmitState::Sending;
        FormView {
            button_label: LABEL_SENDING,
            button_busy: true,
            status_text: "",
            status_class: None,
            clear_fields: false,
        }
    }

    /// The provider settled the submission.
    pub fn settle(&mut self, outcome: Delivery) -> FormView {
        match outcome {
            Delivery::Delivered => {
                self.state = SubmitState::Sent;
                FormView {
                    button_label: LABEL_READY,
                    button_busy: false,
                    status_text: MSG_SENT,
                    status_class: Some(crate::config::dom::CLASS_SUCCESS),
                    clear_fields: true,
                }
            }
            Delivery::Failed => {
                self.state = SubmitState::Failed;
                FormView {
                    button_label: LABEL_READY,
                    button_busy: false,
                    status_text: MSG_FAILED,
                    status_class: Some(crate::config::dom::CLASS_ERROR),
                    clear_fields: false,
                }
            }
        }
    }
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sending_shows_the_busy_button_and_wipes_old_status() {
        let mut flow = ContactFlow::new();
        let view = flow.begin();
        assert_eq!(flow.state(), SubmitState::Sending);
        assert!(view.button_busy);
        assert_eq!(view.button_label, "Sending...");
        assert_eq!(view.status_text, "");
        assert_eq!(view.status_class, None);
        assert!(!view.clear_fields);
    }

    #[test]
    fn delivered_submission_clears_the_fields() {
        let mut flow = ContactFlow::new();
        flow.begin();
        let view = flow.settle(Delivery::Delivered);
        assert_eq!(flow.state(), SubmitState::Sent);
        assert!(!view.button_busy);
        assert_eq!(view.button_label, "Send Message");
        assert_eq!(view.status_text, "Message sent successfully 🚀");
        assert_eq!(view.status_class, Some("success"));
        assert!(view.clear_fields);
    }

    #[test]
    fn failed_submission_keeps_the_fields_for_retry() {
        let mut flow = ContactFlow::new();
        flow.begin();
        let view = flow.settle(Delivery::Failed);
        assert_eq!(flow.state(), SubmitState::Failed);
        assert!(!view.button_busy);
        assert_eq!(view.status_text, "Failed to send message. Try again.");
        assert_eq!(view.status_class, Some("error"));
        assert!(!view.clear_fields);
    }

    #[test]
    fn a_failed_form_can_be_resubmitted() {
        let mut flow = ContactFlow::new();
        flow.begin();
        flow.settle(Delivery::Failed);
        let view = flow.begin();
        assert_eq!(flow.state(), SubmitState::Sending);
        assert!(view.button_busy);
        assert_eq!(flow.settle(Delivery::Delivered).status_class, Some("success"));
    }
}
