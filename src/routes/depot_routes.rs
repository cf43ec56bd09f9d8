use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::depot_dto::{CreateDepotRequest, DepotResponse, UpdateDepotRequest};
use crate::dto::ApiResponse;
use crate::repositories::depot_repository::DepotRepository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_depot_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_depot))
        .route("/", get(list_depots))
        .route("/:id", get(get_depot))
        .route("/:id", put(update_depot))
        .route("/:id", delete(delete_depot))
}

async fn create_depot(
    State(state): State<AppState>,
    Json(request): Json<CreateDepotRequest>,
) -> AppResult<Json<ApiResponse<DepotResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DepotRepository::new(state.pool.clone());
    let depot = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DepotResponse::from(depot),
        "Depot created successfully".to_string(),
    )))
}

async fn list_depots(State(state): State<AppState>) -> AppResult<Json<Vec<DepotResponse>>> {
    let repository = DepotRepository::new(state.pool.clone());
    let depots = repository.list_all().await?;

    Ok(Json(depots.into_iter().map(DepotResponse::from).collect()))
}

async fn get_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DepotResponse>> {
    let repository = DepotRepository::new(state.pool.clone());
    let depot = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Depot {} not found", id)))?;

    Ok(Json(DepotResponse::from(depot)))
}

async fn update_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDepotRequest>,
) -> AppResult<Json<ApiResponse<DepotResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DepotRepository::new(state.pool.clone());
    let depot = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DepotResponse::from(depot),
        "Depot updated successfully".to_string(),
    )))
}

async fn delete_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repository = DepotRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Depot deleted successfully"
    })))
}
