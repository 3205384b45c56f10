//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::quote::QuoteFlowError;
use crate::services::lead_service::LeadError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Lead submission failed: {0}")]
    Lead(#[from] LeadError),
}

impl From<QuoteFlowError> for AppError {
    fn from(error: QuoteFlowError) -> Self {
        match error {
            QuoteFlowError::Incomplete(errors) => AppError::Validation(errors),
            other => AppError::Conflict(other.to_string()),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Lead(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Mensaje apto para mostrar al cliente final
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Please fill in every required field and accept to be contacted".to_string(),
            AppError::NotFound(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
            AppError::Lead(_) => "We couldn't send your request. Please try again.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        let error_response = match self {
            AppError::Validation(e) => {
                log::warn!("Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message,
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                log::warn!("Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::Conflict(msg) => {
                log::warn!("Conflict: {}", msg);
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message,
                    details: None,
                    code: Some("CONFLICT".to_string()),
                }
            }

            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message,
                    details: Some(json!({ "internal_error": msg })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }

            AppError::Lead(e) => {
                log::error!("Lead submission error: {}", e);
                let details = match &e {
                    LeadError::Rejected { status, .. } => json!({ "upstream_status": status }),
                    LeadError::Transport(_) => json!({ "upstream_status": null }),
                };
                ErrorResponse {
                    error: "Lead Submission Failed".to_string(),
                    message,
                    details: Some(details),
                    code: Some("LEAD_SUBMISSION_FAILED".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}
