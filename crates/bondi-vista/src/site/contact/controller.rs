use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::domain::{apply, ContactField, ContactFormState};
use super::recorder::{LeadRecorder, Notifier};

pub const CONFIRMATION_NOTICE: &str =
    "Thank you for your interest in Bondi Vista. Our team will contact you shortly!";

/// Owns one form's state and mediates its change and submit events.
pub struct ContactFormController<R, N> {
    state: ContactFormState,
    recorder: Arc<R>,
    notifier: Arc<N>,
}

/// What a submit did, for callers that care beyond the visitor notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    /// Values as they stood before the reset.
    pub snapshot: ContactFormState,
    /// False when the recorder failed; the visitor is still thanked.
    pub delivered: bool,
}

impl<R, N> ContactFormController<R, N>
where
    R: LeadRecorder,
    N: Notifier,
{
    pub fn new(recorder: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            state: ContactFormState::default(),
            recorder,
            notifier,
        }
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn handle_input_change(&mut self, field: ContactField, value: impl Into<String>) {
        let previous = std::mem::take(&mut self.state);
        self.state = apply(previous, field, value);
    }

    /// Record the current values, clear the form, then thank the visitor.
    ///
    /// Callers must have run the submission gate first; the controller does not re-check
    /// required fields.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        let snapshot = self.state.clone();
        let delivered = match self.recorder.record(&snapshot) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, email = %snapshot.email, "lead was not recorded");
                false
            }
        };

        self.state = ContactFormState::default();
        self.notifier.notify(CONFIRMATION_NOTICE);

        SubmitOutcome {
            snapshot,
            delivered,
        }
    }
}
