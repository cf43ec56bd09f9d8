//! Modelo de Route
//!
//! Movimiento planificado de un vehículo/conductor entre dos depósitos en
//! una fecha dada. Fecha y horas son valores de calendario y de reloj,
//! independientes de zona horaria. Una ruta posee sus entregas.

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Route {
    pub id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub origin_depot_id: i64,
    pub destination_depot_id: i64,
    pub route_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub status: String,
}
