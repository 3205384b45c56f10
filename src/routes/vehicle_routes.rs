use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::vehicle_dto::{VehicleListResponse, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:stock_number", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<VehicleListResponse> {
    let vehicles: Vec<VehicleResponse> = state
        .inventory
        .list()
        .iter()
        .map(VehicleResponse::from)
        .collect();

    Json(VehicleListResponse {
        total: vehicles.len(),
        vehicles,
    })
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(stock_number): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    state
        .inventory
        .find(&stock_number)
        .map(|vehicle| Json(VehicleResponse::from(vehicle)))
        .ok_or_else(|| not_found_error("Vehicle", &stock_number))
}
