use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use tracing::debug;

use super::controller::ContactFormController;
use super::domain::{ContactField, ContactFormState};
use super::gate::SubmissionGate;
use super::recorder::{LeadRecorder, Notifier};
use crate::site::landing::{render_landing_page, LandingContent, PageView};

/// Shared pieces every request needs; form state itself lives per request.
pub struct SiteState<R> {
    pub content: LandingContent,
    pub recorder: Arc<R>,
    pub gate: SubmissionGate,
}

impl<R> SiteState<R> {
    pub fn new(content: LandingContent, recorder: Arc<R>) -> Self {
        Self {
            content,
            recorder,
            gate: SubmissionGate,
        }
    }
}

/// Router serving the landing page and both contact form entry points.
pub fn contact_router<R>(state: Arc<SiteState<R>>) -> Router
where
    R: LeadRecorder + 'static,
{
    Router::new()
        .route("/", get(landing_handler::<R>))
        .route("/contact", post(contact_form_handler::<R>))
        .route("/api/v1/contact", post(contact_api_handler::<R>))
        .with_state(state)
}

/// Collects the notices raised while handling one request.
#[derive(Debug, Default)]
pub(crate) struct NoticeBuffer {
    notices: Mutex<Vec<String>>,
}

impl NoticeBuffer {
    pub(crate) fn drain(&self) -> Vec<String> {
        match self.notices.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for NoticeBuffer {
    fn notify(&self, notice: &str) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice.to_string()),
            Err(poisoned) => poisoned.into_inner().push(notice.to_string()),
        }
    }
}

pub(crate) async fn landing_handler<R>(State(state): State<Arc<SiteState<R>>>) -> Html<String>
where
    R: LeadRecorder + 'static,
{
    Html(render_landing_page(&state.content, &PageView::default()))
}

pub(crate) async fn contact_form_handler<R>(
    State(state): State<Arc<SiteState<R>>>,
    Form(controls): Form<Vec<(String, String)>>,
) -> Response
where
    R: LeadRecorder + 'static,
{
    let notices = Arc::new(NoticeBuffer::default());
    let mut controller = ContactFormController::new(state.recorder.clone(), notices.clone());

    for (name, value) in controls {
        match name.parse::<ContactField>() {
            Ok(field) => controller.handle_input_change(field, field.sanitize(&value)),
            Err(err) => debug!(%err, "ignoring form control"),
        }
    }

    if let Err(violation) = state.gate.check(controller.state()) {
        let view = PageView {
            form: controller.state().clone(),
            notice: None,
            violation: Some(violation),
        };
        let page = render_landing_page(&state.content, &view);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
    }

    controller.handle_submit();
    let view = PageView {
        form: controller.state().clone(),
        notice: notices.drain().pop(),
        violation: None,
    };
    (StatusCode::OK, Html(render_landing_page(&state.content, &view))).into_response()
}

pub(crate) async fn contact_api_handler<R>(
    State(state): State<Arc<SiteState<R>>>,
    Json(payload): Json<ContactFormState>,
) -> Response
where
    R: LeadRecorder + 'static,
{
    let notices = Arc::new(NoticeBuffer::default());
    let mut controller = ContactFormController::new(state.recorder.clone(), notices.clone());

    for (field, value) in payload.fields() {
        controller.handle_input_change(field, field.sanitize(value));
    }

    if let Err(violation) = state.gate.check(controller.state()) {
        let payload = json!({
            "error": violation.to_string(),
            "fields": violation.fields(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let outcome = controller.handle_submit();
    let payload = json!({
        "notice": notices.drain().pop(),
        "delivered": outcome.delivered,
    });
    (StatusCode::ACCEPTED, Json(payload)).into_response()
}
