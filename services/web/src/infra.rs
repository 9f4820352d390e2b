use bondi_vista::config::SiteConfig;
use bondi_vista::site::contact::{ContactFormState, LeadRecorder, Notifier, RecordError};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) site: SiteConfig,
}

/// Serve-mode sink: each lead goes to the log and nothing is kept in process.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoggingLeadRecorder;

impl LeadRecorder for LoggingLeadRecorder {
    fn record(&self, lead: &ContactFormState) -> Result<(), RecordError> {
        info!(
            target: "bondi_vista::leads",
            name = %lead.name,
            email = %lead.email,
            phone = %lead.phone,
            message = %lead.message,
            "lead received"
        );
        Ok(())
    }
}

/// Lead as held by the in-process sink.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LeadEntry {
    pub(crate) received_at: DateTime<Utc>,
    pub(crate) lead: ContactFormState,
}

/// Keeps every lead for the lifetime of the process; used by the demo command.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRecorder {
    entries: Arc<Mutex<Vec<LeadEntry>>>,
}

impl LeadRecorder for InMemoryLeadRecorder {
    fn record(&self, lead: &ContactFormState) -> Result<(), RecordError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| RecordError::Unavailable("lead store poisoned".to_string()))?;
        guard.push(LeadEntry {
            received_at: Utc::now(),
            lead: lead.clone(),
        });
        info!(
            name = %lead.name,
            email = %lead.email,
            phone = %lead.phone,
            total = guard.len(),
            "lead recorded"
        );
        Ok(())
    }
}

impl InMemoryLeadRecorder {
    pub(crate) fn entries(&self) -> Vec<LeadEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Prints notices for command-line runs.
pub(crate) struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notice: &str) {
        println!("Notice: {notice}");
    }
}

pub(crate) struct StaticAsset {
    pub(crate) name: &'static str,
    pub(crate) bytes: &'static [u8],
}

const ASSETS: &[StaticAsset] = &[StaticAsset {
    name: "landing-page-photo.svg",
    bytes: include_bytes!("../assets/landing-page-photo.svg"),
}];

pub(crate) fn find_asset(name: &str) -> Option<&'static StaticAsset> {
    ASSETS.iter().find(|asset| asset.name == name)
}
