use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::ApiResponse;
use crate::repositories::client_repository::ClientRepository;
use crate::services::cascade_service::CascadeService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> AppResult<Json<ApiResponse<ClientResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = ClientRepository::new(state.pool.clone());
    let client = repository.create(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        ClientResponse::from(client),
        "Client created successfully".to_string(),
    )))
}

async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<ClientResponse>>> {
    let repository = ClientRepository::new(state.pool.clone());
    let clients = repository.list_all().await?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ClientResponse>> {
    let repository = ClientRepository::new(state.pool.clone());
    let client = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))?;

    Ok(Json(ClientResponse::from(client)))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateClientRequest>,
) -> AppResult<Json<ApiResponse<ClientResponse>>> {
    request.validate().map_err(AppError::Validation)?;

    let repository = ClientRepository::new(state.pool.clone());
    let client = repository.replace(id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        ClientResponse::from(client),
        "Client updated successfully".to_string(),
    )))
}

// El borrado de un cliente arrastra sus entregas, por lo que pasa por el
// coordinador de cascada y no por el repositorio.
async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let service = CascadeService::new(state.pool.clone());
    service.delete_client(id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Client and its deliveries deleted successfully"
    })))
}
