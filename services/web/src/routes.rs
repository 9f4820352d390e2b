use crate::infra::{find_asset, AppState};
use axum::extract::{DefaultBodyLimit, Path};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use bondi_vista::config::SiteConfig;
use bondi_vista::error::AppError;
use bondi_vista::site::contact::{contact_router, LeadRecorder, SiteState};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_site_routes<R>(site: Arc<SiteState<R>>, limits: &SiteConfig) -> axum::Router
where
    R: LeadRecorder + 'static,
{
    contact_router(site)
        .route("/assets/:file", axum::routing::get(asset_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(DefaultBodyLimit::max(limits.max_form_bytes))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn asset_endpoint(
    Extension(state): Extension<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    let asset = find_asset(&file).ok_or_else(|| AppError::NotFound(format!("asset '{file}'")))?;
    let content_type = mime_guess::from_path(asset.name)
        .first_or_octet_stream()
        .to_string();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, state.site.asset_cache_control()),
        ],
        asset.bytes,
    )
        .into_response())
}
