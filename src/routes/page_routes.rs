//! Rutas HTML: listado y modal de cotización renderizados en el servidor.
//! Cada POST termina en un redirect (303) salvo cuando hay que mostrar un error
//! dentro del propio modal.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use uuid::Uuid;

use crate::dto::quote_dto::{ContactForm, OpenQuoteForm};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::{error_html, listing_html, quote_html};

pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing_page))
        .route("/quotes", post(open_quote))
        .route("/quotes/:id", get(quote_page))
        .route("/quotes/:id/submit", post(submit_quote))
        .route("/quotes/:id/dismiss", post(dismiss_error))
        .route("/quotes/:id/close", post(close_quote))
}

/// Error renderizado como página en vez de JSON
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let title = status.canonical_reason().unwrap_or("Error");
        if status.is_server_error() {
            log::error!("❌ {}", self.0);
        } else {
            log::warn!("⚠️ {}", self.0);
        }
        (status, Html(error_html(title, &self.0.user_message()))).into_response()
    }
}

fn quote_location(id: Uuid) -> String {
    format!("/quotes/{}", id)
}

async fn listing_page(State(state): State<AppState>) -> Html<String> {
    Html(listing_html(state.inventory.list()))
}

async fn open_quote(
    State(state): State<AppState>,
    Form(form): Form<OpenQuoteForm>,
) -> Result<Redirect, PageError> {
    let flow = state.quotes.open(&form.stock_number).await?;
    Ok(Redirect::to(&quote_location(flow.id)))
}

async fn quote_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let flow = state.quotes.get(id).await?;
    Ok(Html(quote_html(&flow, None)))
}

async fn submit_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ContactForm>,
) -> Result<Response, PageError> {
    state.quotes.update_contact(id, form.into()).await?;

    let error = match state.quotes.submit(id).await {
        Ok(_) => return Ok(Redirect::to(&quote_location(id)).into_response()),
        Err(error) => error,
    };

    // Formulario incompleto o fallo del webhook: se vuelve al modal con el aviso
    if !matches!(error, AppError::Validation(_) | AppError::Lead(_)) {
        return Err(error.into());
    }
    let notice = matches!(error, AppError::Validation(_)).then(|| error.user_message());
    let flow = state.quotes.get(id).await?;
    Ok((error.status_code(), Html(quote_html(&flow, notice.as_deref()))).into_response())
}

async fn dismiss_error(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, PageError> {
    state.quotes.dismiss_error(id).await?;
    Ok(Redirect::to(&quote_location(id)))
}

async fn close_quote(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    // Cerrar dos veces no es un error para el navegador
    if let Err(AppError::NotFound(_)) = state.quotes.close(id).await {
        log::debug!("Cotización {} ya estaba cerrada", id);
    }
    Redirect::to("/")
}
