use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo. Sin estado explícito queda "Disponível".
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 20))]
    pub plate: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(range(min = 1950, max = 2050))]
    pub year: i32,
    #[validate(length(min = 1, max = 40))]
    pub status: Option<String>,
    pub depot_id: i64,
}

// Request para reemplazar un vehículo: todos los campos mutables
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 20))]
    pub plate: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(range(min = 1950, max = 2050))]
    pub year: i32,
    #[validate(length(min = 1, max = 40))]
    pub status: String,
    pub depot_id: i64,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub status: String,
    pub depot_id: i64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            model: vehicle.model,
            year: vehicle.year,
            status: vehicle.status,
            depot_id: vehicle.depot_id,
        }
    }
}
