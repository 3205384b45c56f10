use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::quote_dto::{OpenQuoteRequest, QuoteResponse};
use crate::models::contact::ContactUpdate;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_quote))
        .route("/:id", delete(close_quote).get(get_quote))
        .route("/:id/contact", patch(update_contact))
        .route("/:id/submit", post(submit_quote))
        .route("/:id/error", delete(dismiss_error))
}

async fn open_quote(
    State(state): State<AppState>,
    Json(request): Json<OpenQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let flow = state.quotes.open(&request.stock_number).await?;
    Ok((StatusCode::CREATED, Json(QuoteResponse::from(&flow))))
}

async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>, AppError> {
    let flow = state.quotes.get(id).await?;
    Ok(Json(QuoteResponse::from(&flow)))
}

async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ContactUpdate>,
) -> Result<Json<QuoteResponse>, AppError> {
    let flow = state.quotes.update_contact(id, update).await?;
    Ok(Json(QuoteResponse::from(&flow)))
}

async fn submit_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let flow = state.quotes.submit(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        QuoteResponse::from(&flow),
        "We'll get back to you with today's best price shortly.".to_string(),
    )))
}

async fn dismiss_error(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>, AppError> {
    let flow = state.quotes.dismiss_error(id).await?;
    Ok(Json(QuoteResponse::from(&flow)))
}

async fn close_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.quotes.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
