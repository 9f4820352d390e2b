use super::domain::ContactFormState;

/// Sink that takes ownership of a submitted enquiry (CRM, mailbox, log).
pub trait LeadRecorder: Send + Sync {
    fn record(&self, lead: &ContactFormState) -> Result<(), RecordError>;
}

/// Surface that acknowledges the submission to the visitor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("lead sink unavailable: {0}")]
    Unavailable(String),
    #[error("lead rejected by sink: {0}")]
    Rejected(String),
}
