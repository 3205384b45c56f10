//! Servicio de cotizaciones
//!
//! Mantiene en memoria los flujos de cotización abiertos (uno por modal)
//! y coordina apertura, edición, envío del lead y cierre.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::LeadConfig;
use crate::models::contact::ContactUpdate;
use crate::models::lead::LeadPayload;
use crate::models::quote::QuoteFlow;
use crate::repositories::inventory_repository::InventoryRepository;
use crate::services::lead_service::{LeadError, LeadSink};
use crate::services::price_estimator::{self, RandomSource};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Clone)]
pub struct QuoteService {
    inventory: Arc<InventoryRepository>,
    random: Arc<dyn RandomSource>,
    lead_sink: Arc<dyn LeadSink>,
    lead_config: LeadConfig,
    session_ttl: Duration,
    flows: Arc<RwLock<HashMap<Uuid, QuoteFlow>>>,
}

impl QuoteService {
    pub fn new(
        inventory: Arc<InventoryRepository>,
        random: Arc<dyn RandomSource>,
        lead_sink: Arc<dyn LeadSink>,
        lead_config: LeadConfig,
        session_ttl: Duration,
    ) -> Self {
        Self {
            inventory,
            random,
            lead_sink,
            lead_config,
            session_ttl,
            flows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Abrir un flujo nuevo: contacto vacío y sorteo de precio nuevo
    pub async fn open(&self, stock_number: &str) -> AppResult<QuoteFlow> {
        let vehicle = self
            .inventory
            .find(stock_number)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", stock_number))?;

        let estimate = price_estimator::estimate(&vehicle, self.random.as_ref());
        let flow = QuoteFlow::open(vehicle, estimate);

        self.cleanup_expired().await;
        let mut flows = self.flows.write().await;
        flows.insert(flow.id, flow.clone());

        log::info!(
            "🆕 Cotización {} abierta para {} ({})",
            flow.id,
            flow.vehicle.stock_number,
            flow.estimate.display
        );
        Ok(flow)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<QuoteFlow> {
        let flows = self.flows.read().await;
        flows
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))
    }

    pub async fn update_contact(&self, id: Uuid, update: ContactUpdate) -> AppResult<QuoteFlow> {
        let mut flows = self.flows.write().await;
        let flow = flows
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;
        flow.update_contact(update)?;
        Ok(flow.clone())
    }

    /// Enviar el lead. El lock no se mantiene durante la llamada HTTP;
    /// el estado `submitting` impide un segundo envío concurrente.
    ///
    /// La entrega y el registro del resultado corren en su propia tarea:
    /// si el handler se cancela (cliente desconectado) el flujo igual
    /// termina en `submitted` o vuelve a `collecting`.
    pub async fn submit(&self, id: Uuid) -> AppResult<QuoteFlow> {
        let (payload, snapshot) = {
            let mut flows = self.flows.write().await;
            let flow = flows
                .get_mut(&id)
                .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;
            flow.begin_submit()?;
            let payload = LeadPayload::build(
                &self.lead_config,
                &flow.contact,
                &flow.vehicle,
                &flow.estimate.display,
            );
            (payload, flow.clone())
        };

        let flows = self.flows.clone();
        let lead_sink = self.lead_sink.clone();
        let delivery = tokio::spawn(async move {
            let outcome = lead_sink.deliver(&payload).await;
            record_outcome(&flows, id, snapshot, outcome).await
        });

        match delivery.await {
            Ok(result) => result,
            Err(e) => {
                // La tarea entró en pánico: no dejar el flujo bloqueado en `submitting`
                let reason = format!("Lead delivery task failed: {}", e);
                if let Some(flow) = self.flows.write().await.get_mut(&id) {
                    flow.fail_submit(reason.clone());
                }
                Err(AppError::Internal(reason))
            }
        }
    }

    pub async fn dismiss_error(&self, id: Uuid) -> AppResult<QuoteFlow> {
        let mut flows = self.flows.write().await;
        let flow = flows
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;
        flow.dismiss_error();
        Ok(flow.clone())
    }

    /// Cerrar descarta todo el estado local del flujo
    pub async fn close(&self, id: Uuid) -> AppResult<()> {
        let mut flows = self.flows.write().await;
        flows
            .remove(&id)
            .map(|_| log::info!("🗑️ Cotización {} cerrada", id))
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))
    }

    pub async fn open_count(&self) -> usize {
        self.flows.read().await.len()
    }

    /// Limpiar flujos abandonados
    pub async fn cleanup_expired(&self) {
        let ttl = match chrono::Duration::from_std(self.session_ttl) {
            Ok(ttl) => ttl,
            Err(_) => return,
        };
        let cutoff = Utc::now() - ttl;

        let mut flows = self.flows.write().await;
        let before = flows.len();
        flows.retain(|_, flow| flow.touched_at > cutoff);
        let evicted = before - flows.len();
        if evicted > 0 {
            log::debug!("🧹 {} cotizaciones expiradas eliminadas", evicted);
        }
    }
}

async fn record_outcome(
    flows: &RwLock<HashMap<Uuid, QuoteFlow>>,
    id: Uuid,
    mut snapshot: QuoteFlow,
    outcome: Result<(), LeadError>,
) -> AppResult<QuoteFlow> {
    let mut flows = flows.write().await;
    let flow = match flows.get_mut(&id) {
        Some(flow) => flow,
        None => {
            // Cerrado mientras la petición estaba en curso
            log::warn!("⚠️ Cotización {} cerrada durante el envío", id);
            &mut snapshot
        }
    };

    match outcome {
        Ok(()) => {
            flow.complete_submit();
            log::info!("✅ Cotización {} enviada", id);
            Ok(flow.clone())
        }
        Err(e) => {
            flow.fail_submit(e.to_string());
            log::error!("❌ Falló el envío de la cotización {}: {}", id, e);
            Err(AppError::Lead(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactRequest;
    use crate::models::quote::QuoteState;
    use crate::services::price_estimator::FixedAdjustment;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        fail_with: Option<u16>,
        delivered: Mutex<Vec<LeadPayload>>,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn deliver(&self, payload: &LeadPayload) -> Result<(), LeadError> {
            self.delivered.lock().unwrap().push(payload.clone());
            match self.fail_with {
                Some(status) => Err(LeadError::Rejected { status, body: "nope".to_string() }),
                None => Ok(()),
            }
        }
    }

    /// Sink que tarda en responder, como un webhook lento
    struct SlowSink {
        delay: Duration,
        delivered: Mutex<Vec<LeadPayload>>,
    }

    #[async_trait]
    impl LeadSink for SlowSink {
        async fn deliver(&self, payload: &LeadPayload) -> Result<(), LeadError> {
            tokio::time::sleep(self.delay).await;
            self.delivered.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    fn service_with(sink: Arc<dyn LeadSink>, session_ttl: Duration) -> QuoteService {
        QuoteService::new(
            Arc::new(InventoryRepository::seeded().unwrap()),
            Arc::new(FixedAdjustment(0)),
            sink,
            LeadConfig::default(),
            session_ttl,
        )
    }

    fn service(sink: Arc<RecordingSink>) -> QuoteService {
        service_with(sink, Duration::from_secs(3600))
    }

    fn complete() -> ContactUpdate {
        ContactUpdate {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            comments: Some("Weekend test drive?".to_string()),
            consent: Some(true),
        }
    }

    #[tokio::test]
    async fn test_open_unknown_vehicle_is_not_found() {
        let service = service(Arc::new(RecordingSink::default()));
        assert!(matches!(service.open("ZZZ").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submit_sends_exactly_one_lead_with_estimate() {
        let sink = Arc::new(RecordingSink::default());
        let service = service(sink.clone());

        let flow = service.open("HC2234B").await.unwrap();
        service.update_contact(flow.id, complete()).await.unwrap();
        let submitted = service.submit(flow.id).await.unwrap();

        assert_eq!(submitted.state, QuoteState::Submitted);
        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].template_variable.price, "$14,500");
        assert_eq!(delivered[0].template_variable.vin, "2HGFE2F59PH543210");
        assert_eq!(delivered[0].template_variable.comments, "Weekend test drive?");
    }

    #[tokio::test]
    async fn test_incomplete_submit_makes_no_call() {
        let sink = Arc::new(RecordingSink::default());
        let service = service(sink.clone());

        let flow = service.open("HC2234B").await.unwrap();
        let mut partial = complete();
        partial.consent = Some(false);
        service.update_contact(flow.id, partial).await.unwrap();

        assert!(matches!(service.submit(flow.id).await, Err(AppError::Validation(_))));
        assert!(sink.delivered.lock().unwrap().is_empty());
        assert_eq!(service.get(flow.id).await.unwrap().state, QuoteState::Collecting);
    }

    #[tokio::test]
    async fn test_failed_submit_is_surfaced_and_retryable() {
        let sink = Arc::new(RecordingSink {
            fail_with: Some(500),
            ..Default::default()
        });
        let service = service(sink.clone());

        let flow = service.open("FM5521D").await.unwrap();
        service.update_contact(flow.id, complete()).await.unwrap();

        assert!(matches!(service.submit(flow.id).await, Err(AppError::Lead(_))));
        let after = service.get(flow.id).await.unwrap();
        assert_eq!(after.state, QuoteState::Collecting);
        assert!(after.last_error.is_some());

        // Reintentar es otro envío independiente
        assert!(service.submit(flow.id).await.is_err());
        assert_eq!(sink.delivered.lock().unwrap().len(), 2);

        let dismissed = service.dismiss_error(flow.id).await.unwrap();
        assert!(dismissed.last_error.is_none());
    }

    #[tokio::test]
    async fn test_close_then_reopen_has_no_residue() {
        let service = service(Arc::new(RecordingSink::default()));

        let first = service.open("PN0051A").await.unwrap();
        service.update_contact(first.id, complete()).await.unwrap();
        service.close(first.id).await.unwrap();
        assert!(service.get(first.id).await.is_err());

        let second = service.open("BX5108F").await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.vehicle.stock_number, "BX5108F");
        assert_eq!(second.contact, ContactRequest::default());
        assert_eq!(second.state, QuoteState::Collecting);
        assert_eq!(service.open_count().await, 1);
    }

    #[tokio::test]
    async fn test_submitted_flow_is_terminal_until_closed() {
        let service = service(Arc::new(RecordingSink::default()));

        let flow = service.open("TR4412C").await.unwrap();
        service.update_contact(flow.id, complete()).await.unwrap();
        service.submit(flow.id).await.unwrap();

        assert!(matches!(service.submit(flow.id).await, Err(AppError::Conflict(_))));
        assert!(matches!(
            service.update_contact(flow.id, ContactUpdate::default()).await,
            Err(AppError::Conflict(_))
        ));

        service.close(flow.id).await.unwrap();
        let reopened = service.open("TR4412C").await.unwrap();
        assert_eq!(reopened.state, QuoteState::Collecting);
    }

    #[tokio::test]
    async fn test_dropped_submit_still_completes_the_flow() {
        let sink = Arc::new(SlowSink {
            delay: Duration::from_millis(200),
            delivered: Mutex::new(Vec::new()),
        });
        let service = service_with(sink.clone(), Duration::from_secs(3600));

        let flow = service.open("HC2234B").await.unwrap();
        service.update_contact(flow.id, complete()).await.unwrap();

        // El handler se cancela a mitad del envío
        let dropped = tokio::time::timeout(Duration::from_millis(20), service.submit(flow.id)).await;
        assert!(dropped.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;

        let after = service.get(flow.id).await.unwrap();
        assert_eq!(after.state, QuoteState::Submitted);
        assert_eq!(sink.delivered.lock().unwrap().len(), 1);
        assert!(matches!(service.submit(flow.id).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_expired_flows_are_evicted() {
        let service = service_with(Arc::new(RecordingSink::default()), Duration::from_secs(0));
        let stale = service.open("HC2234B").await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        service.open("HC2234B").await.unwrap();

        assert!(service.get(stale.id).await.is_err());
    }

    #[tokio::test]
    async fn test_active_flow_survives_past_ttl_from_opening() {
        let service = service_with(Arc::new(RecordingSink::default()), Duration::from_millis(300));
        let active = service.open("HC2234B").await.unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        service.update_contact(active.id, complete()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Abierto hace 400ms pero editado hace 200ms
        service.open("TR4412C").await.unwrap();
        assert!(service.get(active.id).await.is_ok());

        tokio::time::sleep(Duration::from_millis(350)).await;
        service.open("TR4412C").await.unwrap();
        assert!(service.get(active.id).await.is_err());
    }
}
