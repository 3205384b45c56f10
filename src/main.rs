use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_quotes::config::EnvironmentConfig;
use vehicle_quotes::repositories::InventoryRepository;
use vehicle_quotes::services::{ThreadRandom, WebhookLeadClient};
use vehicle_quotes::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 AutoMax Motors - Inventario y cotizaciones");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    info!("⚙️ Entorno: {}", config.environment);
    info!("📮 Leads -> {} (timezone {})", config.lead.endpoint_url, config.lead.timezone);

    let inventory = InventoryRepository::seeded()?;
    info!("📦 {} vehículos en inventario", inventory.list().len());

    let lead_client = WebhookLeadClient::new(&config.lead)?;
    let addr = config.server_url();

    let app_state = AppState::new(
        config,
        inventory,
        Arc::new(ThreadRandom),
        Arc::new(lead_client),
    );
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    / - Listado de inventario");
    info!("   POST   /quotes - Abrir cotización (formulario)");
    info!("   GET    /quotes/:id - Modal de cotización");
    info!("   POST   /quotes/:id/submit - Enviar formulario");
    info!("   POST   /quotes/:id/dismiss - Descartar error");
    info!("   POST   /quotes/:id/close - Cerrar modal");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   GET    /api/vehicles/:stock_number - Obtener vehículo");
    info!("   POST   /api/quotes - Abrir cotización");
    info!("   GET    /api/quotes/:id - Obtener cotización");
    info!("   PATCH  /api/quotes/:id/contact - Actualizar contacto");
    info!("   POST   /api/quotes/:id/submit - Enviar lead");
    info!("   DELETE /api/quotes/:id/error - Descartar error");
    info!("   DELETE /api/quotes/:id - Cerrar cotización");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
