//! Modelo de Vehicle
//!
//! Registro de inventario tal como se muestra en el listado. Todos los
//! campos son cadenas de presentación; solo el kilometraje se interpreta.

use serde::{Deserialize, Serialize};

/// Imagen usada cuando el vehículo no tiene `image_url`
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Vehículo del inventario - identificado por `stock_number`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub color: String,
    pub stock_number: String,
    pub vin: String,
    pub mileage: String,
    pub fuel_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Precio publicado; el flujo de cotización no lo usa
    pub price: String,
}

impl VehicleRecord {
    /// "2023 Honda Civic"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn image_or_placeholder(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    /// Kilometraje como entero: se descartan todos los caracteres no numéricos.
    /// Una cadena sin dígitos (o que desborda) vale 0.
    pub fn mileage_value(&self) -> u64 {
        parse_mileage(&self.mileage)
    }
}

/// `"32,450 mi"` -> 32450
pub fn parse_mileage(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
