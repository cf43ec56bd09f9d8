//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente al
//! schema PostgreSQL. El mapeo fila → struct es por nombre de columna
//! (`sqlx::FromRow`), nunca por posición.

pub mod client;
pub mod delivery;
pub mod depot;
pub mod driver;
pub mod route;
pub mod vehicle;
