use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::delivery_dto::DeliveryResponse;
use crate::models::route::Route;
use crate::utils::codec;

// Request para crear una ruta. Sin estado explícito queda "Planejada".
// Fecha y horas llegan como texto ISO-8601 y las parsea chrono.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub origin_depot_id: i64,
    pub destination_depot_id: i64,
    pub route_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    #[validate(length(min = 1, max = 40))]
    pub status: Option<String>,
}

// Request para reemplazar una ruta: todos los campos mutables
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub origin_depot_id: i64,
    pub destination_depot_id: i64,
    pub route_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    #[validate(length(min = 1, max = 40))]
    pub status: String,
}

// Response de ruta, con fecha y horas ya codificadas como texto
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub origin_depot_id: i64,
    pub destination_depot_id: i64,
    pub route_date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub status: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            vehicle_id: route.vehicle_id,
            driver_id: route.driver_id,
            origin_depot_id: route.origin_depot_id,
            destination_depot_id: route.destination_depot_id,
            route_date: codec::encode_date(route.route_date),
            departure_time: codec::encode_time(route.departure_time),
            arrival_time: codec::encode_time(route.arrival_time),
            status: route.status,
        }
    }
}

// Ruta con sus entregas ordenadas por secuencia ascendente
#[derive(Debug, Serialize)]
pub struct RouteWithDeliveriesResponse {
    pub route: RouteResponse,
    pub deliveries: Vec<DeliveryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_response_encodes_temporal_fields() {
        let route = Route {
            id: 7,
            vehicle_id: 1,
            driver_id: 2,
            origin_depot_id: 3,
            destination_depot_id: 3,
            route_date: NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
            departure_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            status: "Planejada".to_string(),
        };

        let response = RouteResponse::from(route);
        assert_eq!(response.route_date, "2025-07-08");
        assert_eq!(response.departure_time, "08:00:00");
        assert_eq!(response.arrival_time, "17:30:00");
    }

    #[test]
    fn test_create_request_parses_iso_temporal_fields() {
        let request: CreateRouteRequest = serde_json::from_value(serde_json::json!({
            "vehicle_id": 1,
            "driver_id": 2,
            "origin_depot_id": 3,
            "destination_depot_id": 4,
            "route_date": "2025-07-08",
            "departure_time": "08:00:00",
            "arrival_time": "17:30:00"
        }))
        .unwrap();
        assert_eq!(request.route_date, NaiveDate::from_ymd_opt(2025, 7, 8).unwrap());
        assert!(request.status.is_none());
    }
}
