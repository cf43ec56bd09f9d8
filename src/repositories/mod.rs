//! Repositorios de entidades
//!
//! Un repositorio por tabla: posee la forma de las consultas y el mapeo de
//! columnas de esa tabla. Todas las sentencias usan placeholders
//! posicionales; ningún valor del llamador se interpola en el SQL.

pub mod client_repository;
pub mod delivery_repository;
pub mod depot_repository;
pub mod driver_repository;
pub mod route_repository;
pub mod vehicle_repository;
