use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::depot::Depot;
use crate::utils::codec;

// Request para crear un depósito
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepotRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

pub type UpdateDepotRequest = CreateDepotRequest;

// Response de depósito
#[derive(Debug, Serialize)]
pub struct DepotResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Depot> for DepotResponse {
    fn from(depot: Depot) -> Self {
        Self {
            id: depot.id,
            name: depot.name,
            address: depot.address,
            latitude: codec::decimal_to_f64(depot.latitude),
            longitude: codec::decimal_to_f64(depot.longitude),
        }
    }
}
