use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::delivery_dto::{
    CreateDeliveryRequest, DeliveryResponse, UpdateDeliveryRequest, UpdateDeliveryStatusRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_delivery_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_delivery))
        .route("/", get(list_deliveries))
        .route("/:id", get(get_delivery))
        .route("/:id", put(update_delivery))
        .route("/:id", delete(delete_delivery))
        .route("/:id/status", patch(update_delivery_status))
}

async fn create_delivery(
    State(state): State<AppState>,
    Json(request): Json<CreateDeliveryRequest>,
) -> AppResult<Json<ApiResponse<DeliveryResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DeliveryRepository::new(state.pool.clone());
    let delivery = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DeliveryResponse::from(delivery),
        "Delivery created successfully".to_string(),
    )))
}

async fn list_deliveries(State(state): State<AppState>) -> AppResult<Json<Vec<DeliveryResponse>>> {
    let repository = DeliveryRepository::new(state.pool.clone());
    let deliveries = repository.list_all().await?;

    Ok(Json(deliveries.into_iter().map(DeliveryResponse::from).collect()))
}

async fn get_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeliveryResponse>> {
    let repository = DeliveryRepository::new(state.pool.clone());
    let delivery = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Delivery {} not found", id)))?;

    Ok(Json(DeliveryResponse::from(delivery)))
}

async fn update_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDeliveryRequest>,
) -> AppResult<Json<ApiResponse<DeliveryResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DeliveryRepository::new(state.pool.clone());
    let delivery = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DeliveryResponse::from(delivery),
        "Delivery updated successfully".to_string(),
    )))
}

/// Actualización parcial: estado, y opcionalmente secuencia y notas
async fn update_delivery_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDeliveryStatusRequest>,
) -> AppResult<Json<ApiResponse<DeliveryResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = DeliveryRepository::new(state.pool.clone());
    let delivery = repository.update_status(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        DeliveryResponse::from(delivery),
        "Delivery status updated successfully".to_string(),
    )))
}

async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repository = DeliveryRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Delivery deleted successfully"
    })))
}
