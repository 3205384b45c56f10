//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Endpoint de agendamiento usado cuando no se configura `LEAD_ENDPOINT_URL`
pub const DEFAULT_LEAD_ENDPOINT_URL: &str =
    "https://internal-api-us.shortloop.dev/api/v1/scheduling/batch-debug";
/// Identificador de enrutamiento (assistantId) por defecto
pub const DEFAULT_LEAD_ROUTING_ID: &str = "692a003fc51dd95fc9c82af6";
pub const DEFAULT_LEAD_TIMEZONE: &str = "America/Denver";

/// Errores al leer la configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Destino de los leads: `{endpointUrl, routingId, timezone}`
#[derive(Debug, Clone, PartialEq)]
pub struct LeadConfig {
    pub endpoint_url: String,
    pub routing_id: String,
    pub timezone: String,
    /// Timeout del cliente HTTP; `None` deja el comportamiento por defecto de reqwest
    pub request_timeout: Option<Duration>,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_LEAD_ENDPOINT_URL.to_string(),
            routing_id: DEFAULT_LEAD_ROUTING_ID.to_string(),
            timezone: DEFAULT_LEAD_TIMEZONE.to_string(),
            request_timeout: None,
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub lead: LeadConfig,
    pub quote_session_ttl: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            lead: LeadConfig::default(),
            quote_session_ttl: Duration::from_secs(3600),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let request_timeout = parse_optional::<u64>(&lookup, "LEAD_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs);

        let lead = LeadConfig {
            endpoint_url: non_empty(&lookup, "LEAD_ENDPOINT_URL")?
                .unwrap_or(defaults.lead.endpoint_url),
            routing_id: non_empty(&lookup, "LEAD_ROUTING_ID")?
                .unwrap_or(defaults.lead.routing_id),
            timezone: non_empty(&lookup, "LEAD_TIMEZONE")?
                .unwrap_or(defaults.lead.timezone),
            request_timeout,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_optional(&lookup, "PORT")?.unwrap_or(defaults.port),
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            lead,
            quote_session_ttl: parse_optional::<u64>(&lookup, "QUOTE_SESSION_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.quote_session_ttl),
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

// Una variable presente pero vacía es un error: probablemente un .env mal escrito
fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
