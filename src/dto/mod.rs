//! DTOs de la API
//!
//! Formas de request/response expuestas por los endpoints JSON y los
//! formularios HTML.

pub mod api_response;
pub mod quote_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
