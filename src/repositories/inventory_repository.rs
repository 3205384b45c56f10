//! Repositorio de inventario
//!
//! Lista fija de vehículos cargada al iniciar el proceso. Solo lectura.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::vehicle::VehicleRecord;

#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    #[error("Duplicate stock number '{0}' in inventory")]
    DuplicateStockNumber(String),
}

#[derive(Debug, Clone)]
pub struct InventoryRepository {
    vehicles: Vec<VehicleRecord>,
}

impl InventoryRepository {
    /// Crea el repositorio verificando que `stock_number` sea único
    pub fn new(vehicles: Vec<VehicleRecord>) -> Result<Self, InventoryError> {
        let mut seen = HashSet::new();
        for vehicle in &vehicles {
            if !seen.insert(vehicle.stock_number.as_str()) {
                return Err(InventoryError::DuplicateStockNumber(
                    vehicle.stock_number.clone(),
                ));
            }
        }
        Ok(Self { vehicles })
    }

    /// Inventario del concesionario
    pub fn seeded() -> Result<Self, InventoryError> {
        Self::new(seed_vehicles())
    }

    pub fn list(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn find(&self, stock_number: &str) -> Option<&VehicleRecord> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.stock_number == stock_number)
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    year: &str,
    make: &str,
    model: &str,
    trim: &str,
    color: &str,
    stock_number: &str,
    vin: &str,
    mileage: &str,
    fuel_type: &str,
    image_url: &str,
    price: &str,
) -> VehicleRecord {
    VehicleRecord {
        year: year.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        trim: trim.to_string(),
        color: color.to_string(),
        stock_number: stock_number.to_string(),
        vin: vin.to_string(),
        mileage: mileage.to_string(),
        fuel_type: fuel_type.to_string(),
        image_url: Some(image_url.to_string()),
        price: price.to_string(),
    }
}

fn seed_vehicles() -> Vec<VehicleRecord> {
    vec![
        vehicle(
            "2024", "Chevrolet", "Spark", "LT Hatchback", "Black Granite",
            "PN0051A", "KL8CD6S94EC539770", "32,450 mi", "Gasoline",
            "/black-chevrolet-spark-hatchback-car.jpg", "$12,995",
        ),
        vehicle(
            "2023", "Honda", "Civic", "Sport Sedan", "Rallye Red",
            "HC2234B", "2HGFE2F59PH543210", "18,200 mi", "Gasoline",
            "/red-honda-civic-sedan-car.jpg", "$24,500",
        ),
        vehicle(
            "2024", "Toyota", "RAV4", "XLE AWD", "Lunar Rock",
            "TR4412C", "2T3P1RFV5PW123456", "8,750 mi", "Hybrid",
            "/gray-toyota-rav4-suv-car.jpg", "$34,800",
        ),
        vehicle(
            "2022", "Ford", "Mustang", "GT Premium", "Oxford White",
            "FM5521D", "1FA6P8CF8N5123789", "22,100 mi", "Gasoline",
            "/white-ford-mustang-gt-sports-car.jpg", "$42,750",
        ),
        vehicle(
            "2023", "Tesla", "Model 3", "Long Range", "Pearl White",
            "TM3301E", "5YJ3E1EA1PF654321", "12,400 mi", "Electric",
            "/white-tesla-model-3.png", "$38,900",
        ),
        vehicle(
            "2024", "BMW", "X5", "xDrive40i", "Alpine White",
            "BX5108F", "5UXCR6C07P9A87654", "5,200 mi", "Gasoline",
            "/white-bmw-x5-luxury-suv-car.jpg", "$62,400",
        ),
    ]
}
