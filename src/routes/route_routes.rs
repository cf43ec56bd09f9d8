use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::delivery_dto::DeliveryResponse;
use crate::dto::route_dto::{
    CreateRouteRequest, RouteResponse, RouteWithDeliveriesResponse, UpdateRouteRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::services::cascade_service::CascadeService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id", get(get_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
        .route("/:id/deliveries", get(get_route_with_deliveries))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> AppResult<Json<ApiResponse<RouteResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = RouteRepository::new(state.pool.clone());
    let route = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        RouteResponse::from(route),
        "Route created successfully".to_string(),
    )))
}

async fn list_routes(State(state): State<AppState>) -> AppResult<Json<Vec<RouteResponse>>> {
    let repository = RouteRepository::new(state.pool.clone());
    let routes = repository.list_all().await?;

    Ok(Json(routes.into_iter().map(RouteResponse::from).collect()))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RouteResponse>> {
    let repository = RouteRepository::new(state.pool.clone());
    let route = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Route {} not found", id)))?;

    Ok(Json(RouteResponse::from(route)))
}

/// Ruta con sus entregas ordenadas por secuencia ascendente
async fn get_route_with_deliveries(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RouteWithDeliveriesResponse>> {
    let route = RouteRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Route {} not found", id)))?;

    let deliveries = DeliveryRepository::new(state.pool.clone())
        .find_by_route(id)
        .await?;

    Ok(Json(RouteWithDeliveriesResponse {
        route: RouteResponse::from(route),
        deliveries: deliveries.into_iter().map(DeliveryResponse::from).collect(),
    }))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRouteRequest>,
) -> AppResult<Json<ApiResponse<RouteResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = RouteRepository::new(state.pool.clone());
    let route = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        RouteResponse::from(route),
        "Route updated successfully".to_string(),
    )))
}

// El borrado de una ruta arrastra sus entregas, por lo que pasa por el
// coordinador de cascada y no por el repositorio.
async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let service = CascadeService::new(state.pool.clone());
    service.delete_route(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Route and its deliveries deleted successfully"
    })))
}
