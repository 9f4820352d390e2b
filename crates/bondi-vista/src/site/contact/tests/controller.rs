use super::common::*;
use crate::site::contact::domain::{ContactField, ContactFormState};
use crate::site::contact::{ContactFormController, CONFIRMATION_NOTICE};
use std::sync::Arc;

#[test]
fn new_controller_starts_empty() {
    let (controller, _, _) = build_controller();
    assert_eq!(controller.state(), &ContactFormState::default());
    assert!(controller.state().is_empty());
}

#[test]
fn last_write_to_a_field_wins_regardless_of_interleaving() {
    let (mut first, _, _) = build_controller();
    first.handle_input_change(ContactField::Name, "J");
    first.handle_input_change(ContactField::Email, "jane@x.com");
    first.handle_input_change(ContactField::Name, "Jane");
    first.handle_input_change(ContactField::Message, "Interested");

    let (mut second, _, _) = build_controller();
    second.handle_input_change(ContactField::Message, "Interested");
    second.handle_input_change(ContactField::Name, "Jane");
    second.handle_input_change(ContactField::Email, "jane@x.com");

    assert_eq!(first.state(), second.state());
    assert_eq!(first.state(), &jane());
}

#[test]
fn input_change_never_touches_other_fields() {
    let (mut controller, _, _) = build_controller();
    for (field, value) in jane().fields() {
        controller.handle_input_change(field, value);
    }

    controller.handle_input_change(ContactField::Phone, "0400 123 456");

    let state = controller.state();
    assert_eq!(state.phone, "0400 123 456");
    assert_eq!(state.name, "Jane");
    assert_eq!(state.email, "jane@x.com");
    assert_eq!(state.message, "Interested");
}

#[test]
fn input_change_accepts_empty_values() {
    let (mut controller, _, _) = build_controller();
    controller.handle_input_change(ContactField::Name, "Jane");
    controller.handle_input_change(ContactField::Name, "");
    assert!(controller.state().is_empty());
}

#[test]
fn submit_records_snapshot_resets_and_notifies_once() {
    let (mut controller, recorder, notifier) = build_controller();
    controller.handle_input_change(ContactField::Name, "Jane");
    controller.handle_input_change(ContactField::Email, "jane@x.com");
    controller.handle_input_change(ContactField::Message, "Interested");

    let outcome = controller.handle_submit();

    assert_eq!(recorder.leads(), vec![jane()]);
    assert_eq!(outcome.snapshot, jane());
    assert!(outcome.delivered);
    assert_eq!(controller.state(), &ContactFormState::default());
    assert_eq!(notifier.notices(), vec![CONFIRMATION_NOTICE.to_string()]);
}

#[test]
fn form_is_editable_again_after_submit() {
    let (mut controller, recorder, notifier) = build_controller();
    for (field, value) in jane().fields() {
        controller.handle_input_change(field, value);
    }
    controller.handle_submit();

    controller.handle_input_change(ContactField::Name, "Sam");
    controller.handle_input_change(ContactField::Email, "sam@y.org");
    controller.handle_input_change(ContactField::Message, "Penthouse pricing?");
    controller.handle_submit();

    let leads = recorder.leads();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[1].name, "Sam");
    assert_eq!(leads[1].phone, "");
    assert_eq!(notifier.notices().len(), 2);
    assert!(controller.state().is_empty());
}

#[test]
fn recorder_failure_still_thanks_the_visitor() {
    let notifier = Arc::new(MemoryNotifier::default());
    let mut controller = ContactFormController::new(Arc::new(OfflineRecorder), notifier.clone());
    for (field, value) in jane().fields() {
        controller.handle_input_change(field, value);
    }

    let outcome = controller.handle_submit();

    assert!(!outcome.delivered);
    assert_eq!(outcome.snapshot, jane());
    assert!(controller.state().is_empty());
    assert_eq!(notifier.notices(), vec![CONFIRMATION_NOTICE.to_string()]);
}
