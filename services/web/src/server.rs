use crate::cli::ServeArgs;
use crate::infra::{AppState, LoggingLeadRecorder};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bondi_vista::config::AppConfig;
use bondi_vista::error::AppError;
use bondi_vista::site::{LandingContent, SiteState};
use bondi_vista::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        site: config.site.clone(),
    };

    let site = Arc::new(SiteState::new(
        LandingContent::bondi_vista(),
        Arc::new(LoggingLeadRecorder),
    ));

    let app = with_site_routes(site, &config.site)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        %addr,
        max_form_bytes = config.site.max_form_bytes,
        "bondi vista landing page ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
