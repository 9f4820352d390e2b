use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DEFAULT_MAX_FORM_BYTES: usize = 16 * 1024;
const DEFAULT_ASSET_MAX_AGE_SECS: u32 = 24 * 60 * 60;

/// Settings for the landing site, read from `.env` and `APP_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("APP_PORT", 3000u16)?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_form_bytes = parse_var("APP_MAX_FORM_BYTES", DEFAULT_MAX_FORM_BYTES)?;
        if max_form_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "APP_MAX_FORM_BYTES",
                value: "0".to_string(),
            });
        }
        let asset_max_age_secs = parse_var("APP_ASSET_MAX_AGE", DEFAULT_ASSET_MAX_AGE_SECS)?;

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            site: SiteConfig {
                max_form_bytes,
                asset_max_age_secs,
            },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter used when `RUST_LOG` is absent.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Limits and caching for the public pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Largest contact form body accepted, in bytes.
    pub max_form_bytes: usize,
    pub asset_max_age_secs: u32,
}

impl SiteConfig {
    pub fn asset_cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_max_age_secs)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
            asset_max_age_secs: DEFAULT_ASSET_MAX_AGE_SECS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "{key} has an unusable value '{value}'")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Invalid { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
