use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::repositories::driver_repository::DriverRepository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:id", get(get_driver))
        .route("/:id", put(update_driver))
        .route("/:id", delete(delete_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> AppResult<Json<ApiResponse<DriverResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DriverResponse::from(driver),
        "Driver created successfully".to_string(),
    )))
}

async fn list_drivers(State(state): State<AppState>) -> AppResult<Json<Vec<DriverResponse>>> {
    let repository = DriverRepository::new(state.pool.clone());
    let drivers = repository.list_all().await?;

    Ok(Json(drivers.into_iter().map(DriverResponse::from).collect()))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DriverResponse>> {
    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))?;

    Ok(Json(DriverResponse::from(driver)))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDriverRequest>,
) -> AppResult<Json<ApiResponse<DriverResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DriverResponse::from(driver),
        "Driver updated successfully".to_string(),
    )))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repository = DriverRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Driver deleted successfully"
    })))
}
