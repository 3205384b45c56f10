//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: inventario, flujos de cotización abiertos
//! y configuración. No hay estado global.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::inventory_repository::InventoryRepository;
use crate::services::lead_service::LeadSink;
use crate::services::price_estimator::RandomSource;
use crate::services::quote_service::QuoteService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub inventory: Arc<InventoryRepository>,
    pub quotes: QuoteService,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        inventory: InventoryRepository,
        random: Arc<dyn RandomSource>,
        lead_sink: Arc<dyn LeadSink>,
    ) -> Self {
        let inventory = Arc::new(inventory);
        let quotes = QuoteService::new(
            inventory.clone(),
            random,
            lead_sink,
            config.lead.clone(),
            config.quote_session_ttl,
        );

        Self {
            config,
            inventory,
            quotes,
        }
    }
}
