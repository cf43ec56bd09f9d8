//! Modelo de Client
//!
//! Un cliente es el destino de cero o más entregas. Las coordenadas se
//! almacenan como punto fijo NUMERIC(9,6).

use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub phone: Option<String>,
    pub email: Option<String>,
}
