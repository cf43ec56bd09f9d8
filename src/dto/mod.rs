//! DTOs de la API
//!
//! Requests deserializados y validados en la frontera HTTP, y responses
//! ya convertidos por el codec de valores.

pub mod client_dto;
pub mod delivery_dto;
pub mod depot_dto;
pub mod driver_dto;
pub mod route_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
