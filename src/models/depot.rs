//! Modelo de Depot
//!
//! Instalación fija: origen/destino de rutas y base de vehículos.

use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Depot {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}
