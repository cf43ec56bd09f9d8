//! Modelo de Vehicle
//!
//! La matrícula es única. El estado es una etiqueta libre, no un enum
//! cerrado del almacén; el valor por defecto es "Disponível".

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub status: String,
    pub depot_id: i64,
}
