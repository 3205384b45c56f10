use serde::Serialize;

use crate::models::vehicle::VehicleRecord;

// Response de vehículo: imagen ya resuelta (placeholder si falta)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub title: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub color: String,
    pub stock_number: String,
    pub vin: String,
    pub mileage: String,
    pub fuel_type: String,
    pub image_url: String,
    pub price: String,
}

impl From<&VehicleRecord> for VehicleResponse {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            title: vehicle.title(),
            year: vehicle.year.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            trim: vehicle.trim.clone(),
            color: vehicle.color.clone(),
            stock_number: vehicle.stock_number.clone(),
            vin: vehicle.vin.clone(),
            mileage: vehicle.mileage.clone(),
            fuel_type: vehicle.fuel_type.clone(),
            image_url: vehicle.image_or_placeholder().to_string(),
            price: vehicle.price.clone(),
        }
    }
}

// Listado con el total, como en la cabecera de la página
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub total: usize,
    pub vehicles: Vec<VehicleResponse>,
}
