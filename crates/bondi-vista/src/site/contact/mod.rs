//! Lead-capture contact form: field state, the submission gate enforced by the page, the
//! controller that records and resets on submit, and the HTTP routes that drive it.

pub mod controller;
pub mod domain;
pub mod gate;
pub mod recorder;
pub mod router;

#[cfg(test)]
mod tests;

pub use controller::{ContactFormController, SubmitOutcome, CONFIRMATION_NOTICE};
pub use domain::{apply, ContactField, ContactFormState, UnknownField};
pub use gate::{GateViolation, SubmissionGate};
pub use recorder::{LeadRecorder, Notifier, RecordError};
pub use router::{contact_router, SiteState};
