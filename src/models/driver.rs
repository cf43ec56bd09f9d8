//! Modelo de Driver

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub license_number: String,
    pub phone: Option<String>,
}
