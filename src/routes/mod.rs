//! Routers de la API
//!
//! Capa fina de entrada/salida: traduce verbos y rutas HTTP a llamadas a
//! repositorios y servicios, y presenta los resultados. No contiene
//! reglas del dominio.

pub mod client_routes;
pub mod delivery_routes;
pub mod depot_routes;
pub mod driver_routes;
pub mod route_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/client", client_routes::create_client_router())
        .nest("/api/depot", depot_routes::create_depot_router())
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/driver", driver_routes::create_driver_router())
        .nest("/api/route", route_routes::create_route_router())
        .nest("/api/delivery", delivery_routes::create_delivery_router())
}

/// Endpoint de liveness
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "delivery-ops",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
