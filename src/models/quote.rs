//! Modelo del flujo de cotización
//!
//! Un `QuoteFlow` es una instancia del modal: vehículo seleccionado,
//! precio estimado, datos de contacto y estado del envío.
//!
//! ```text
//! collecting --submit--> submitting --ok--> submitted (terminal)
//!      ^                     |
//!      +------ error --------+
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::models::contact::{ContactRequest, ContactUpdate};
use crate::models::vehicle::VehicleRecord;
use crate::services::price_estimator::Estimate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteState {
    Collecting,
    Submitting,
    Submitted,
}

/// Transiciones no permitidas
#[derive(Error, Debug)]
pub enum QuoteFlowError {
    #[error("A submission is already in progress for this quote")]
    SubmissionInProgress,

    #[error("This quote request was already submitted")]
    AlreadySubmitted,

    #[error("Contact details are incomplete: {0}")]
    Incomplete(ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct QuoteFlow {
    pub id: Uuid,
    pub vehicle: VehicleRecord,
    pub estimate: Estimate,
    pub contact: ContactRequest,
    pub state: QuoteState,
    /// Último fallo de envío, visible hasta descartarlo o reintentar
    pub last_error: Option<String>,
    pub opened_at: DateTime<Utc>,
    /// Última interacción del cliente; la expiración se mide desde aquí
    pub touched_at: DateTime<Utc>,
}

impl QuoteFlow {
    pub fn open(vehicle: VehicleRecord, estimate: Estimate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vehicle,
            estimate,
            contact: ContactRequest::default(),
            state: QuoteState::Collecting,
            last_error: None,
            opened_at: now,
            touched_at: now,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state == QuoteState::Collecting && self.contact.is_complete()
    }

    fn ensure_collecting(&self) -> Result<(), QuoteFlowError> {
        match self.state {
            QuoteState::Collecting => Ok(()),
            QuoteState::Submitting => Err(QuoteFlowError::SubmissionInProgress),
            QuoteState::Submitted => Err(QuoteFlowError::AlreadySubmitted),
        }
    }

    pub fn update_contact(&mut self, update: ContactUpdate) -> Result<(), QuoteFlowError> {
        self.ensure_collecting()?;
        self.contact.apply(update);
        self.last_error = None;
        self.touched_at = Utc::now();
        Ok(())
    }

    /// collecting -> submitting, solo con el formulario completo
    pub fn begin_submit(&mut self) -> Result<(), QuoteFlowError> {
        self.ensure_collecting()?;
        self.contact
            .validate_for_submission()
            .map_err(QuoteFlowError::Incomplete)?;
        self.state = QuoteState::Submitting;
        self.last_error = None;
        self.touched_at = Utc::now();
        Ok(())
    }

    /// submitting -> submitted; los datos de contacto ya no se necesitan
    pub fn complete_submit(&mut self) {
        self.state = QuoteState::Submitted;
        self.contact = ContactRequest::default();
        self.last_error = None;
    }

    /// submitting -> collecting, conservando lo escrito por el cliente
    pub fn fail_submit(&mut self, reason: String) {
        self.state = QuoteState::Collecting;
        self.last_error = Some(reason);
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}
