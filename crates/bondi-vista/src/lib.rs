//! Bondi Vista landing page: static marketing content, HTML rendering, and the lead-capture
//! contact form exposed over HTTP.

pub mod config;
pub mod error;
pub mod site;
pub mod telemetry;
