use super::common::*;
use crate::site::contact::domain::{apply, ContactField, ContactFormState};
use crate::site::contact::gate::{GateViolation, SubmissionGate};

#[test]
fn complete_enquiry_passes() {
    assert_eq!(SubmissionGate.check(&jane()), Ok(()));
}

#[test]
fn phone_is_optional() {
    let state = apply(jane(), ContactField::Phone, "");
    assert!(SubmissionGate.check(&state).is_ok());
}

#[test]
fn each_required_field_blocks_submission() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let state = apply(jane(), field, "");
        assert_eq!(
            SubmissionGate.check(&state),
            Err(GateViolation::MissingRequired(vec![field])),
            "{field} should be required"
        );
    }
}

#[test]
fn empty_form_reports_every_required_field() {
    let violation = SubmissionGate
        .check(&ContactFormState::default())
        .expect_err("empty form is rejected");
    assert_eq!(
        violation.fields(),
        vec![ContactField::Name, ContactField::Email, ContactField::Message]
    );
}

#[test]
fn malformed_email_is_rejected_after_presence_check() {
    let state = apply(jane(), ContactField::Email, "jane.at.x.com");
    let violation = SubmissionGate.check(&state).expect_err("email rejected");
    assert_eq!(
        violation,
        GateViolation::MalformedEmail("jane.at.x.com".to_string())
    );
    assert_eq!(violation.fields(), vec![ContactField::Email]);
}
