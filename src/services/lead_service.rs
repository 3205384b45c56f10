//! Cliente del webhook de leads
//!
//! Un único POST JSON por envío. Del servicio remoto solo se consume el
//! status HTTP; el cuerpo se lee únicamente para diagnóstico en caso de error.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::LeadConfig;
use crate::models::lead::LeadPayload;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Could not reach the lead endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lead endpoint responded with status {status}")]
    Rejected { status: u16, body: String },
}

/// Destino de los leads
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), LeadError>;
}

pub struct WebhookLeadClient {
    client: Client,
    endpoint_url: String,
}

impl WebhookLeadClient {
    /// Crear cliente HTTP; sin timeout explícito salvo que se configure
    pub fn new(config: &LeadConfig) -> Result<Self, LeadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint_url: config.endpoint_url.clone(),
        })
    }
}

#[async_trait]
impl LeadSink for WebhookLeadClient {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), LeadError> {
        log::info!(
            "📤 Enviando lead para {} a {}",
            payload.template_variable.stock_number,
            self.endpoint_url
        );

        // .json() fija Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Error de red enviando lead: {}", e);
                LeadError::Transport(e)
            })?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Lead rechazado con status {}: {}", status, body);
            return Err(LeadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        log::info!("✅ Lead entregado");
        Ok(())
    }
}
