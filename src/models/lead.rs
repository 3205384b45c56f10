//! Payload del lead enviado al webhook de agendamiento
//!
//! La forma del JSON es el contrato con el servicio externo; los nombres
//! de campo no se pueden cambiar.

use serde::{Deserialize, Serialize};

use crate::config::LeadConfig;
use crate::models::contact::ContactRequest;
use crate::models::vehicle::VehicleRecord;

/// Política de llamadas enviada al sistema remoto (no se aplica localmente)
pub const CALL_MAX_RETRIES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub assistant_id: String,
    pub contact: LeadContact,
    pub meta_data: LeadMetaData,
    pub call_strategy: CallStrategy,
    pub template_variable: TemplateVariables,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContact {
    pub name: String,
    pub phone_no: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadMetaData {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStrategy {
    pub max_retries: u32,
    pub bypass_duplicate_check: bool,
    pub ignore_working_hours: bool,
    pub timezone: String,
}

/// Atributos del vehículo para la plantilla de la llamada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariables {
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub color: String,
    pub stock_number: String,
    pub vin: String,
    pub mileage: String,
    pub fuel_type: String,
    pub image_url: String,
    /// Precio estimado del flujo, no el precio publicado
    pub price: String,
    pub comments: String,
}

impl LeadPayload {
    pub fn build(
        config: &LeadConfig,
        contact: &ContactRequest,
        vehicle: &VehicleRecord,
        estimated_price: &str,
    ) -> Self {
        Self {
            assistant_id: config.routing_id.clone(),
            contact: LeadContact {
                name: contact.first_name.trim().to_string(),
                phone_no: contact.phone.clone(),
            },
            meta_data: LeadMetaData {
                email: contact.email.clone(),
            },
            call_strategy: CallStrategy {
                max_retries: CALL_MAX_RETRIES,
                bypass_duplicate_check: true,
                ignore_working_hours: true,
                timezone: config.timezone.clone(),
            },
            template_variable: TemplateVariables {
                year: vehicle.year.clone(),
                make: vehicle.make.clone(),
                model: vehicle.model.clone(),
                trim: vehicle.trim.clone(),
                color: vehicle.color.clone(),
                stock_number: vehicle.stock_number.clone(),
                vin: vehicle.vin.clone(),
                mileage: vehicle.mileage.clone(),
                fuel_type: vehicle.fuel_type.clone(),
                image_url: vehicle.image_url.clone().unwrap_or_default(),
                price: estimated_price.to_string(),
                comments: contact.comments.clone(),
            },
        }
    }
}
