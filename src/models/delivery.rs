//! Modelo de Delivery
//!
//! Una parada dentro de una ruta, ligada a exactamente un cliente.
//! `sequence` es único dentro de la ruta. `delivered_at` se estampa cuando
//! el estado entrante es "Entregue" y no se limpia en otros estados.

use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Delivery {
    pub id: i64,
    pub route_id: i64,
    pub client_id: i64,
    pub sequence: i32,
    pub status: String,
    pub scheduled_at: NaiveDateTime,
    pub delivered_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}
