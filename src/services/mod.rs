//! Services module
//! 
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan operaciones que pueden involucrar
//! múltiples modelos o integraciones externas.

pub mod lead_service;
pub mod price_estimator;
pub mod quote_service;

pub use lead_service::{LeadError, LeadSink, WebhookLeadClient};
pub use price_estimator::{FixedAdjustment, RandomSource, ThreadRandom};
pub use quote_service::QuoteService;
