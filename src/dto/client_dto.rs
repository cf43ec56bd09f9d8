use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::client::Client;
use crate::utils::codec;

// Request para crear un cliente. Las coordenadas entran como flotantes y
// se almacenan como punto fijo.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

// El reemplazo es total: misma forma que la creación
pub type UpdateClientRequest = CreateClientRequest;

// Response de cliente. Las coordenadas salen como flotantes (conversión
// con pérdida, aceptada).
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            address: client.address,
            latitude: codec::decimal_to_f64(client.latitude),
            longitude: codec::decimal_to_f64(client.longitude),
            phone: client.phone,
            email: client.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_response_coordinates_within_tolerance() {
        let client = Client {
            id: 1,
            name: "Ana".to_string(),
            address: "Rua X".to_string(),
            latitude: Decimal::from_str("-3.730000").unwrap(),
            longitude: Decimal::from_str("-38.520000").unwrap(),
            phone: None,
            email: None,
        };

        let response = ClientResponse::from(client);
        assert!((response.latitude - (-3.73)).abs() < 1e-6);
        assert!((response.longitude - (-38.52)).abs() < 1e-6);
    }

    #[test]
    fn test_create_request_rejects_out_of_range_latitude() {
        let request: CreateClientRequest = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "address": "Rua X",
            "latitude": 95.0,
            "longitude": -38.52
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let request: CreateClientRequest = serde_json::from_value(serde_json::json!({
            "name": "",
            "address": "Rua X",
            "latitude": -3.73,
            "longitude": -38.52
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
