use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::delivery::Delivery;
use crate::utils::codec;

// Request para crear una entrega. Sin estado explícito queda "Pendente".
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeliveryRequest {
    pub route_id: i64,
    pub client_id: i64,
    #[validate(range(min = 1))]
    pub sequence: i32,
    #[validate(length(min = 1, max = 40))]
    pub status: Option<String>,
    pub scheduled_at: NaiveDateTime,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Request para reemplazar una entrega: todos los campos mutables.
// `delivered_at` no se reemplaza; solo lo estampa la máquina de estados.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDeliveryRequest {
    pub route_id: i64,
    pub client_id: i64,
    #[validate(range(min = 1))]
    pub sequence: i32,
    #[validate(length(min = 1, max = 40))]
    pub status: String,
    pub scheduled_at: NaiveDateTime,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Actualización parcial de estado: la única operación parcial del sistema.
// `sequence` y `notes` se reemplazan si vienen y se conservan si no.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDeliveryStatusRequest {
    #[validate(length(min = 1, max = 40))]
    pub status: String,
    #[validate(range(min = 1))]
    pub sequence: Option<i32>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Response de entrega, con instantes codificados como texto sin zona
#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub id: i64,
    pub route_id: i64,
    pub client_id: i64,
    pub sequence: i32,
    pub status: String,
    pub scheduled_at: String,
    pub delivered_at: Option<String>,
    pub notes: Option<String>,
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        Self {
            id: delivery.id,
            route_id: delivery.route_id,
            client_id: delivery.client_id,
            sequence: delivery.sequence,
            status: delivery.status,
            scheduled_at: codec::encode_timestamp(delivery.scheduled_at),
            delivered_at: delivery.delivered_at.map(codec::encode_timestamp),
            notes: delivery.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_delivery(delivered_at: Option<NaiveDateTime>) -> Delivery {
        Delivery {
            id: 1,
            route_id: 7,
            client_id: 1,
            sequence: 1,
            status: "Pendente".to_string(),
            scheduled_at: NaiveDate::from_ymd_opt(2025, 7, 8)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            delivered_at,
            notes: None,
        }
    }

    #[test]
    fn test_pending_delivery_has_null_delivered_at() {
        let response = DeliveryResponse::from(sample_delivery(None));
        assert_eq!(response.scheduled_at, "2025-07-08T09:00:00");
        assert!(response.delivered_at.is_none());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["delivered_at"].is_null());
    }

    #[test]
    fn test_delivered_at_is_encoded_without_timezone() {
        let stamp = NaiveDate::from_ymd_opt(2025, 7, 8)
            .unwrap()
            .and_hms_opt(15, 45, 12)
            .unwrap();
        let response = DeliveryResponse::from(sample_delivery(Some(stamp)));
        assert_eq!(response.delivered_at.as_deref(), Some("2025-07-08T15:45:12"));
    }

    #[test]
    fn test_status_request_requires_non_empty_status() {
        let request: UpdateDeliveryStatusRequest =
            serde_json::from_value(serde_json::json!({ "status": "" })).unwrap();
        assert!(request.validate().is_err());
    }
}
