use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        VehicleResponse::from(vehicle),
        "Vehicle created successfully".to_string(),
    )))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<VehicleResponse>>> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicles = repository.list_all().await?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<VehicleResponse>> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok(Json(VehicleResponse::from(vehicle)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        VehicleResponse::from(vehicle),
        "Vehicle updated successfully".to_string(),
    )))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repository = VehicleRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehicle deleted successfully"
    })))
}
