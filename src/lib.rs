//! Listado de inventario de vehículos y captura de leads
//!
//! Sirve la página de inventario y el flujo "Get Today's Price": precio
//! estimado (placeholder), formulario de contacto y envío del lead al
//! webhook de agendamiento.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use routes::{page_routes, quote_routes, vehicle_routes};
pub use state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(page_routes::create_page_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/quotes", quote_routes::create_quote_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
