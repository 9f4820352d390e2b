use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::site::contact::domain::ContactFormState;
use crate::site::contact::recorder::{LeadRecorder, Notifier, RecordError};
use crate::site::contact::router::{contact_router, SiteState};
use crate::site::contact::ContactFormController;
use crate::site::landing::LandingContent;

#[derive(Default, Clone)]
pub(super) struct MemoryRecorder {
    leads: Arc<Mutex<Vec<ContactFormState>>>,
}

impl MemoryRecorder {
    pub(super) fn leads(&self) -> Vec<ContactFormState> {
        self.leads.lock().expect("recorder mutex poisoned").clone()
    }
}

impl LeadRecorder for MemoryRecorder {
    fn record(&self, lead: &ContactFormState) -> Result<(), RecordError> {
        self.leads
            .lock()
            .expect("recorder mutex poisoned")
            .push(lead.clone());
        Ok(())
    }
}

pub(super) struct OfflineRecorder;

impl LeadRecorder for OfflineRecorder {
    fn record(&self, _lead: &ContactFormState) -> Result<(), RecordError> {
        Err(RecordError::Unavailable("crm offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    notices: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<String> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &str) {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice.to_string());
    }
}

pub(super) fn build_controller() -> (
    ContactFormController<MemoryRecorder, MemoryNotifier>,
    Arc<MemoryRecorder>,
    Arc<MemoryNotifier>,
) {
    let recorder = Arc::new(MemoryRecorder::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let controller = ContactFormController::new(recorder.clone(), notifier.clone());
    (controller, recorder, notifier)
}

pub(super) fn jane() -> ContactFormState {
    ContactFormState {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        phone: String::new(),
        message: "Interested".to_string(),
    }
}

pub(super) fn site_state<R>(recorder: Arc<R>) -> Arc<SiteState<R>> {
    Arc::new(SiteState::new(LandingContent::bondi_vista(), recorder))
}

pub(super) fn router_with_recorder(recorder: Arc<MemoryRecorder>) -> axum::Router {
    contact_router(site_state(recorder))
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
