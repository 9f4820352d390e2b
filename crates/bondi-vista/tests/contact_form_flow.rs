//! End-to-end behavior of the contact form through the public controller facade: field edits,
//! the submission gate, and the record/reset/notify sequence.

use std::sync::{Arc, Mutex};

use bondi_vista::site::contact::{
    apply, ContactField, ContactFormController, ContactFormState, LeadRecorder, Notifier,
    RecordError, SubmissionGate, CONFIRMATION_NOTICE,
};

/// Records both sinks into one journal so ordering between them is observable.
#[derive(Default)]
struct Journal {
    entries: Mutex<Vec<String>>,
    leads: Mutex<Vec<ContactFormState>>,
}

impl Journal {
    fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("journal mutex").clone()
    }

    fn leads(&self) -> Vec<ContactFormState> {
        self.leads.lock().expect("journal mutex").clone()
    }
}

impl LeadRecorder for Journal {
    fn record(&self, lead: &ContactFormState) -> Result<(), RecordError> {
        self.entries
            .lock()
            .expect("journal mutex")
            .push(format!("record:{}", lead.name));
        self.leads.lock().expect("journal mutex").push(lead.clone());
        Ok(())
    }
}

impl Notifier for Journal {
    fn notify(&self, notice: &str) {
        self.entries
            .lock()
            .expect("journal mutex")
            .push(format!("notify:{notice}"));
    }
}

#[test]
fn jane_registers_interest() {
    let journal = Arc::new(Journal::default());
    let mut controller = ContactFormController::new(journal.clone(), journal.clone());

    controller.handle_input_change(ContactField::Name, "Jane");
    controller.handle_input_change(ContactField::Email, "jane@x.com");
    controller.handle_input_change(ContactField::Message, "Interested");
    assert!(SubmissionGate.check(controller.state()).is_ok());

    controller.handle_submit();

    assert_eq!(
        journal.leads(),
        vec![ContactFormState {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "Interested".to_string(),
        }]
    );
    assert_eq!(controller.state(), &ContactFormState::default());
    assert_eq!(
        journal.entries(),
        vec![
            "record:Jane".to_string(),
            format!("notify:{CONFIRMATION_NOTICE}"),
        ]
    );
}

#[test]
fn submit_resets_whatever_was_entered() {
    let journal = Arc::new(Journal::default());
    let mut controller = ContactFormController::new(journal.clone(), journal.clone());

    let values = [
        (ContactField::Name, "Ana María"),
        (ContactField::Email, "ana@bondi.example"),
        (ContactField::Phone, "+61 2 9000 0000"),
        (ContactField::Message, "Two bedrooms,\nocean side please"),
    ];
    for (field, value) in values {
        controller.handle_input_change(field, value);
    }

    let outcome = controller.handle_submit();

    for (field, value) in values {
        assert_eq!(outcome.snapshot.get(field), value);
        assert_eq!(controller.state().get(field), "");
    }
}

#[test]
fn reducer_is_usable_without_a_controller() {
    let state = [
        (ContactField::Message, "first"),
        (ContactField::Name, "Jane"),
        (ContactField::Message, "second"),
    ]
    .into_iter()
    .fold(ContactFormState::default(), |state, (field, value)| {
        apply(state, field, value)
    });

    assert_eq!(state.name, "Jane");
    assert_eq!(state.message, "second");
    assert_eq!(state.email, "");
    assert_eq!(state.phone, "");
}
