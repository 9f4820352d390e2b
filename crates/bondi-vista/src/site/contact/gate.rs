use super::domain::{ContactField, ContactFormState};

/// Reasons the page refuses to hand a submission to the controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateViolation {
    #[error("required fields missing: {}", join_fields(.0))]
    MissingRequired(Vec<ContactField>),
    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),
}

impl GateViolation {
    /// Fields the visitor has to correct.
    pub fn fields(&self) -> Vec<ContactField> {
        match self {
            GateViolation::MissingRequired(fields) => fields.clone(),
            GateViolation::MalformedEmail(_) => vec![ContactField::Email],
        }
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Required-field and email-shape rules the form enforces before submit is reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionGate;

impl SubmissionGate {
    pub fn check(&self, state: &ContactFormState) -> Result<(), GateViolation> {
        let missing: Vec<ContactField> = state
            .fields()
            .filter(|(field, value)| field.is_required() && value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(GateViolation::MissingRequired(missing));
        }

        if !looks_like_email(&state.email) {
            return Err(GateViolation::MalformedEmail(state.email.clone()));
        }

        Ok(())
    }
}

fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
