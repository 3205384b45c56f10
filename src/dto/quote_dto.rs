use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::contact::{ContactRequest, ContactUpdate};
use crate::models::quote::{QuoteFlow, QuoteState};
use crate::services::price_estimator::Estimate;

// Request para abrir una cotización (JSON)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenQuoteRequest {
    pub stock_number: String,
}

// Request para abrir una cotización desde la tarjeta del listado
#[derive(Debug, Deserialize)]
pub struct OpenQuoteForm {
    pub stock_number: String,
}

/// Formulario HTML del modal. Un checkbox sin marcar no se envía.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub comments: String,
    pub consent: Option<String>,
}

impl From<ContactForm> for ContactUpdate {
    fn from(form: ContactForm) -> Self {
        Self {
            first_name: Some(form.first_name),
            last_name: Some(form.last_name),
            email: Some(form.email),
            phone: Some(form.phone),
            comments: Some(form.comments),
            consent: Some(form.consent.is_some()),
        }
    }
}

// Response de cotización
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: Uuid,
    pub state: QuoteState,
    pub vehicle: VehicleResponse,
    pub estimate: Estimate,
    pub contact: ContactRequest,
    pub can_submit: bool,
    pub last_error: Option<String>,
    pub opened_at: DateTime<Utc>,
}

impl From<&QuoteFlow> for QuoteResponse {
    fn from(flow: &QuoteFlow) -> Self {
        Self {
            id: flow.id,
            state: flow.state,
            vehicle: VehicleResponse::from(&flow.vehicle),
            estimate: flow.estimate.clone(),
            contact: flow.contact.clone(),
            can_submit: flow.can_submit(),
            last_error: flow.last_error.clone(),
            opened_at: flow.opened_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_consent_means_false() {
        let form = ContactForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "5551234567".to_string(),
            comments: String::new(),
            consent: None,
        };
        let update = ContactUpdate::from(form);
        assert_eq!(update.consent, Some(false));
        assert_eq!(update.first_name.as_deref(), Some("John"));
    }
}
